//! # serde_flatjson
//!
//! A small, fast codec for *flat* JSON objects: one object, string keys, and
//! values that are either strings or 64-bit signed integers.
//!
//! ## What is supported?
//!
//! ```text
//! {"name": "Alice", "id": 7, "delta": -3}
//! ```
//!
//! Nothing else: no nesting, arrays, booleans, `null`, floats or escape
//! sequences. See [`format`] for the exact rules.
//!
//! ## Key Features
//!
//! - **Two operations**: [`decode`] text into a [`FlatMap`], [`encode`] a map back to text
//! - **Ordered**: [`FlatMap`] keeps insertion order, so encode/decode round trips are stable
//! - **Serde Compatible**: decode into, or encode from, any flat `#[derive(Serialize, Deserialize)]` type
//! - **Two error kinds**: [`Error::InvalidInput`] and [`Error::UnsupportedType`], nothing partial on failure
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_flatjson::{decode, encode, FlatValue};
//!
//! let map = decode(r#"{"a": 1, "b": "x"}"#).unwrap();
//! assert_eq!(map.get("a"), Some(&FlatValue::Integer(1)));
//! assert_eq!(map.get("b"), Some(&FlatValue::from("x")));
//!
//! assert_eq!(encode(&map).unwrap(), r#"{"a": 1, "b": "x"}"#);
//! ```
//!
//! ### With Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_flatjson::{encode, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string() };
//! let text = encode(&user).unwrap();
//! assert_eq!(text, r#"{"id": 123, "name": "Alice"}"#);
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Decoding**: single pass over the input bytes, no backtracking
//! - **Encoding**: one pre-sized output buffer
//! - **Thread safety**: every call works on its own buffers; there is no shared state

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod scan;
pub mod ser;
pub mod value;

pub use de::{Decoder, Deserializer};
pub use error::{Error, Result};
pub use map::FlatMap;
pub use options::{CodecOptions, TrailingPolicy};
pub use ser::{Encoder, FlatMapSerializer};
pub use value::FlatValue;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decodes a flat JSON object.
///
/// Text after an empty `{}` is rejected like any other trailing text; use
/// [`decode_with_options`] with [`TrailingPolicy::LenientAfterEmpty`] to ignore it.
///
/// # Examples
///
/// ```rust
/// use serde_flatjson::{decode, Error, FlatValue};
///
/// let map = decode(r#"{"hello": 10, "world": "value"}"#).unwrap();
/// assert_eq!(map.get("hello"), Some(&FlatValue::Integer(10)));
///
/// assert_eq!(decode(r#"{"a": 1"#), Err(Error::InvalidInput));
/// ```
///
/// # Errors
///
/// [`Error::InvalidInput`] on any grammar violation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(input: &str) -> Result<FlatMap> {
    Decoder::new(input).decode()
}

/// Decodes a flat JSON object with custom options.
///
/// # Errors
///
/// [`Error::InvalidInput`] on any grammar violation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(input: &str, options: &CodecOptions) -> Result<FlatMap> {
    Decoder::with_options(input, options).decode()
}

/// Decodes a flat JSON object from UTF-8 bytes.
///
/// # Errors
///
/// [`Error::InvalidInput`] if the bytes are not UTF-8 or not a valid object.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_slice(input: &[u8]) -> Result<FlatMap> {
    let s = std::str::from_utf8(input).map_err(|_| Error::InvalidInput)?;
    decode(s)
}

/// Encodes any flat `T: Serialize` as a flat JSON object.
///
/// [`FlatMap`], string-keyed maps, and structs whose fields are strings or
/// integers are accepted.
///
/// # Examples
///
/// ```rust
/// use serde_flatjson::encode;
/// use std::collections::BTreeMap;
///
/// let mut counts = BTreeMap::new();
/// counts.insert("apples", 3);
/// counts.insert("pears", -1);
/// assert_eq!(encode(&counts).unwrap(), r#"{"apples": 3, "pears": -1}"#);
/// ```
///
/// # Errors
///
/// [`Error::UnsupportedType`] if a value is not text or an `i64`-sized
/// integer, a key is not text, or `value` is not a map or struct. Nothing is
/// returned in that case.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let map = to_map(value)?;
    Ok(encode_map(&map))
}

/// Encodes a [`FlatMap`]. A `FlatMap` only holds supported values, so this
/// cannot fail.
///
/// # Examples
///
/// ```rust
/// use serde_flatjson::{encode_map, FlatMap};
///
/// assert_eq!(encode_map(&FlatMap::new()), "{}");
/// ```
#[must_use]
pub fn encode_map(map: &FlatMap) -> String {
    let mut encoder = Encoder::new();
    encoder.write_map(map);
    encoder.into_inner()
}

/// Converts any flat `T: Serialize` into a [`FlatMap`].
///
/// # Errors
///
/// [`Error::UnsupportedType`] under the same conditions as [`encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_map<T>(value: &T) -> Result<FlatMap>
where
    T: ?Sized + Serialize,
{
    value.serialize(FlatMapSerializer)
}

/// Deserializes an instance of `T` from a decoded [`FlatMap`].
///
/// # Errors
///
/// [`Error::InvalidInput`] if the map does not fit `T` (missing field, wrong
/// value kind, integer out of range).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_map<T>(map: FlatMap) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::new(map))
}

/// Deserializes an instance of `T` from flat JSON text.
///
/// # Examples
///
/// ```rust
/// use serde_flatjson::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#"{"x": 1, "y": 2}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// [`Error::InvalidInput`] if the text is not a valid object or does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_map(decode(s)?)
}

/// Deserializes an instance of `T` from UTF-8 bytes of flat JSON.
///
/// # Errors
///
/// [`Error::InvalidInput`] if the bytes are not UTF-8, not a valid object, or
/// do not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_map(decode_slice(v)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        team: String,
    }

    #[test]
    fn test_encode_decode_point() {
        let point = Point { x: 1, y: -2 };
        let text = encode(&point).unwrap();
        assert_eq!(text, r#"{"x": 1, "y": -2}"#);
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_encode_decode_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            team: "core".to_string(),
        };

        let text = encode(&user).unwrap();
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_encode_flat_map_matches_encode_map() {
        let map = flatjson!({ "b": "x", "a": 1 });
        assert_eq!(encode(&map).unwrap(), encode_map(&map));
    }

    #[test]
    fn test_encode_hashmap_entries() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), FlatValue::Integer(1));
        map.insert("b".to_string(), FlatValue::from("x"));

        let text = encode(&map).unwrap();
        // HashMap order is arbitrary, so only check the entries.
        assert!(text == r#"{"a": 1, "b": "x"}"# || text == r#"{"b": "x", "a": 1}"#);
    }

    #[test]
    fn test_decode_slice() {
        let map = decode_slice(br#"{"n": 5}"#).unwrap();
        assert_eq!(map.get("n"), Some(&FlatValue::Integer(5)));

        assert_eq!(decode_slice(b"{\"n\": \"\xff\"}"), Err(Error::InvalidInput));
    }

    #[test]
    fn test_from_slice() {
        let point: Point = from_slice(br#"{"y": 4, "x": 3}"#).unwrap();
        assert_eq!(point, Point { x: 3, y: 4 });
    }

    #[test]
    fn test_from_map_and_to_map() {
        let map = to_map(&Point { x: 5, y: 6 }).unwrap();
        assert_eq!(map.get("x"), Some(&FlatValue::Integer(5)));

        let point: Point = from_map(map).unwrap();
        assert_eq!(point, Point { x: 5, y: 6 });
    }

    #[test]
    fn test_decode_with_options() {
        assert_eq!(decode("{} x"), Err(Error::InvalidInput));
        let map = decode_with_options("{} x", &CodecOptions::lenient()).unwrap();
        assert!(map.is_empty());
    }
}
