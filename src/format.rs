//! Flat JSON format reference
//!
//! This module documents the subset of JSON read and written by this crate.
//! It contains no code.
//!
//! # Documents
//!
//! A document is exactly one object. Whitespace (space, tab, newline, carriage
//! return, vertical tab, form feed) may appear before and after every token.
//!
//! ```text
//! {"name": "Alice", "id": 7}
//! ```
//!
//! ## Keys
//!
//! Keys are double-quoted. Later duplicates replace earlier values; the entry
//! stays where the key first appeared.
//!
//! ```rust
//! use serde_flatjson::{decode, encode};
//!
//! let map = decode(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
//! assert_eq!(encode(&map).unwrap(), r#"{"a": 3, "b": 2}"#);
//! ```
//!
//! ## Values
//!
//! | Kind    | Syntax                               | Rust type            |
//! |---------|--------------------------------------|----------------------|
//! | Text    | `"` raw characters `"`               | `FlatValue::Text`    |
//! | Integer | optional `+`/`-`, one or more digits | `FlatValue::Integer` |
//!
//! Integers must fit in an `i64`; a larger literal is rejected. Leading zeros
//! and a leading `+` are accepted on input; output never has either.
//!
//! ```rust
//! use serde_flatjson::{decode, encode};
//!
//! let map = decode(r#"{"n": +007}"#).unwrap();
//! assert_eq!(encode(&map).unwrap(), r#"{"n": 7}"#);
//! assert!(decode(r#"{"n": 9223372036854775808}"#).is_err());
//! ```
//!
//! Booleans, `null`, floating-point numbers, arrays and nested objects are not
//! part of the format.
//!
//! ```rust
//! use serde_flatjson::{decode, Error};
//!
//! for input in [r#"{"a": true}"#, r#"{"a": null}"#, r#"{"a": 1.5}"#, r#"{"a": {}}"#] {
//!     assert_eq!(decode(input), Err(Error::InvalidInput));
//! }
//! ```
//!
//! # Escaping
//!
//! There is none. A string runs to the next `"`, so a backslash is ordinary
//! text and `\"` ends the string. The encoder writes keys and text verbatim.
//! Round trips are exact only when no key or text value contains `"`.
//!
//! ```rust
//! use serde_flatjson::decode;
//!
//! let map = decode(r#"{"path": "C:\dir\n"}"#).unwrap();
//! assert_eq!(map.get("path").and_then(|v| v.as_str()), Some(r"C:\dir\n"));
//! ```
//!
//! # Output
//!
//! The encoder writes `{`, then `"key": value` entries separated by `", "`,
//! then `}`. The empty map is written as `{}`.
//!
//! # Trailing text
//!
//! Only whitespace may follow the closing brace. With
//! [`TrailingPolicy::LenientAfterEmpty`](crate::TrailingPolicy) text after an
//! empty `{}` is ignored instead.
