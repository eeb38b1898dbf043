//! Error types for flat JSON encoding and decoding.
//!
//! The codec reports exactly two kinds of failure, each carrying only a fixed
//! message:
//!
//! - [`Error::InvalidInput`]: the text does not follow the supported grammar
//! - [`Error::UnsupportedType`]: a value (or key) cannot be written as flat JSON
//!
//! Neither carries a position. A failed call returns no partial result.
//!
//! ## Examples
//!
//! ```rust
//! use serde_flatjson::{decode, Error};
//!
//! let err = decode("{\"a\" 1}").unwrap_err();
//! assert_eq!(err, Error::InvalidInput);
//! assert_eq!(err.to_string(), "Invalid or unsupported JSON");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors of the flat JSON codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Decode-side: any deviation from the supported object grammar.
    #[error("Invalid or unsupported JSON")]
    InvalidInput,

    /// Encode-side: a value that is neither text nor integer, or a key that is not text.
    #[error("Unsupported value type for dumps")]
    UnsupportedType,
}

impl Error {
    /// Returns `true` for decode-side grammar failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flatjson::Error;
    ///
    /// assert!(Error::InvalidInput.is_invalid_input());
    /// assert!(!Error::UnsupportedType.is_invalid_input());
    /// ```
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput)
    }

    /// Returns `true` for encode-side type failures.
    #[must_use]
    pub const fn is_unsupported_type(&self) -> bool {
        matches!(self, Error::UnsupportedType)
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        Error::UnsupportedType
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        Error::InvalidInput
    }
}

pub type Result<T> = std::result::Result<T, Error>;
