//! The value type stored in a flat JSON object.
//!
//! [`FlatValue`] is a closed union of the only two value kinds the format
//! supports: text and 64-bit signed integers.
//!
//! ## Examples
//!
//! ```rust
//! use serde_flatjson::FlatValue;
//!
//! let text = FlatValue::from("hello");
//! let number = FlatValue::from(42);
//!
//! assert!(text.is_text());
//! assert_eq!(number.as_i64(), Some(42));
//! assert_eq!(number.to_string(), "42");
//! assert_eq!(text.to_string(), "\"hello\"");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A value in a flat JSON object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlatValue {
    Text(String),
    Integer(i64),
}

impl FlatValue {
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, FlatValue::Text(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, FlatValue::Integer(_))
    }

    /// Returns the text if this is a [`FlatValue::Text`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_flatjson::FlatValue;
    ///
    /// assert_eq!(FlatValue::from("x").as_str(), Some("x"));
    /// assert_eq!(FlatValue::from(1).as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlatValue::Text(s) => Some(s),
            FlatValue::Integer(_) => None,
        }
    }

    /// Returns the integer if this is a [`FlatValue::Integer`].
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FlatValue::Integer(i) => Some(*i),
            FlatValue::Text(_) => None,
        }
    }
}

/// Writes the value the way the encoder does: text between raw quotes with no
/// escaping, integers in plain base 10.
impl fmt::Display for FlatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatValue::Text(s) => write!(f, "\"{}\"", s),
            FlatValue::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl Serialize for FlatValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FlatValue::Text(s) => serializer.serialize_str(s),
            FlatValue::Integer(i) => serializer.serialize_i64(*i),
        }
    }
}

impl<'de> Deserialize<'de> for FlatValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct FlatValueVisitor;

        impl<'de> Visitor<'de> for FlatValueVisitor {
            type Value = FlatValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a 64-bit signed integer")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(FlatValue::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(FlatValue::Integer)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(FlatValue::Text(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(FlatValue::Text(value))
            }
        }

        deserializer.deserialize_any(FlatValueVisitor)
    }
}

impl TryFrom<FlatValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: FlatValue) -> crate::Result<Self> {
        match value {
            FlatValue::Integer(i) => Ok(i),
            FlatValue::Text(_) => Err(crate::Error::UnsupportedType),
        }
    }
}

impl TryFrom<FlatValue> for String {
    type Error = crate::Error;

    fn try_from(value: FlatValue) -> crate::Result<Self> {
        match value {
            FlatValue::Text(s) => Ok(s),
            FlatValue::Integer(_) => Err(crate::Error::UnsupportedType),
        }
    }
}

impl From<i8> for FlatValue {
    fn from(value: i8) -> Self {
        FlatValue::Integer(value as i64)
    }
}

impl From<i16> for FlatValue {
    fn from(value: i16) -> Self {
        FlatValue::Integer(value as i64)
    }
}

impl From<i32> for FlatValue {
    fn from(value: i32) -> Self {
        FlatValue::Integer(value as i64)
    }
}

impl From<i64> for FlatValue {
    fn from(value: i64) -> Self {
        FlatValue::Integer(value)
    }
}

impl From<u8> for FlatValue {
    fn from(value: u8) -> Self {
        FlatValue::Integer(value as i64)
    }
}

impl From<u16> for FlatValue {
    fn from(value: u16) -> Self {
        FlatValue::Integer(value as i64)
    }
}

impl From<u32> for FlatValue {
    fn from(value: u32) -> Self {
        FlatValue::Integer(value as i64)
    }
}

impl From<String> for FlatValue {
    fn from(value: String) -> Self {
        FlatValue::Text(value)
    }
}

impl From<&str> for FlatValue {
    fn from(value: &str) -> Self {
        FlatValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryfrom_i64() {
        let result: i64 = TryFrom::try_from(FlatValue::Integer(42)).unwrap();
        assert_eq!(result, 42);

        let err = i64::try_from(FlatValue::Text("42".to_string())).unwrap_err();
        assert_eq!(err, crate::Error::UnsupportedType);
    }

    #[test]
    fn test_tryfrom_string() {
        let result: String = TryFrom::try_from(FlatValue::from("hello")).unwrap();
        assert_eq!(result, "hello");

        assert!(String::try_from(FlatValue::Integer(1)).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(FlatValue::from(42i32), FlatValue::Integer(42));
        assert_eq!(FlatValue::from(-1i8), FlatValue::Integer(-1));
        assert_eq!(FlatValue::from(u32::MAX), FlatValue::Integer(4_294_967_295));
        assert_eq!(FlatValue::from("test"), FlatValue::Text("test".to_string()));
        assert_eq!(
            FlatValue::from("test".to_string()),
            FlatValue::Text("test".to_string())
        );
    }

    #[test]
    fn test_display_matches_encoder() {
        assert_eq!(FlatValue::Integer(-15).to_string(), "-15");
        assert_eq!(FlatValue::Integer(0).to_string(), "0");
        assert_eq!(FlatValue::from("a b").to_string(), "\"a b\"");
        // No escaping is applied.
        assert_eq!(FlatValue::from("a\\b").to_string(), "\"a\\b\"");
    }

    #[test]
    fn test_deserialize_from_json() {
        let v: FlatValue = serde_json::from_str("17").unwrap();
        assert_eq!(v, FlatValue::Integer(17));

        let v: FlatValue = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(v, FlatValue::from("x"));

        assert!(serde_json::from_str::<FlatValue>("1.5").is_err());
        assert!(serde_json::from_str::<FlatValue>("true").is_err());
        assert!(serde_json::from_str::<FlatValue>("18446744073709551615").is_err());
    }
}
