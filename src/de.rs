//! Flat JSON decoding.
//!
//! This module provides the [`Decoder`], which turns text into a [`FlatMap`],
//! and a serde [`Deserializer`] that feeds a decoded map into any
//! `T: Deserialize`.
//!
//! ## Grammar
//!
//! ```text
//! Object := '{' WS ( Pair ( ',' WS Pair )* )? WS '}' WS
//! Pair   := String WS ':' WS Value
//! Value  := String | Integer
//! ```
//!
//! Every violation, wherever it happens, is reported as
//! [`Error::InvalidInput`]. Nothing decoded before the failure is returned.
//!
//! ## Usage
//!
//! ```rust
//! use serde_flatjson::{decode, from_str, FlatValue};
//! use serde::Deserialize;
//!
//! let map = decode(r#"{"a": 1, "b": "x"}"#).unwrap();
//! assert_eq!(map.get("a"), Some(&FlatValue::Integer(1)));
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Pair { a: i32, b: String }
//!
//! let pair: Pair = from_str(r#"{"a": 1, "b": "x"}"#).unwrap();
//! assert_eq!(pair, Pair { a: 1, b: "x".to_string() });
//! ```

use crate::options::{CodecOptions, TrailingPolicy};
use crate::scan::Scanner;
use crate::{Error, FlatMap, FlatValue, Result};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// Drives the scanner across the object grammar and builds a [`FlatMap`].
pub struct Decoder<'a> {
    scanner: Scanner<'a>,
    options: CodecOptions,
}

impl<'a> Decoder<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &CodecOptions::default())
    }

    #[must_use]
    pub fn with_options(input: &'a str, options: &CodecOptions) -> Self {
        Decoder {
            scanner: Scanner::new(input),
            options: options.clone(),
        }
    }

    /// Decodes the whole input as one object.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] on any grammar violation, including non-whitespace
    /// text after the closing brace.
    pub fn decode(mut self) -> Result<FlatMap> {
        self.scanner.skip_whitespace();
        self.expect(b'{')?;
        self.scanner.skip_whitespace();

        let mut map = FlatMap::new();
        if self.scanner.eat(b'}') {
            if self.options.trailing == TrailingPolicy::LenientAfterEmpty {
                return Ok(map);
            }
        } else {
            self.decode_pairs(&mut map)?;
        }

        self.scanner.skip_whitespace();
        if !self.scanner.at_end() {
            return Err(Error::InvalidInput);
        }
        Ok(map)
    }

    // Consumes pairs up to and including the closing brace.
    fn decode_pairs(&mut self, map: &mut FlatMap) -> Result<()> {
        loop {
            let key = self.scanner.read_quoted_string()?;
            self.scanner.skip_whitespace();
            self.expect(b':')?;
            self.scanner.skip_whitespace();

            let value = self.decode_value()?;
            map.insert(key.to_string(), value);

            self.scanner.skip_whitespace();
            if self.scanner.eat(b',') {
                self.scanner.skip_whitespace();
            } else if self.scanner.eat(b'}') {
                return Ok(());
            } else {
                return Err(Error::InvalidInput);
            }
        }
    }

    fn decode_value(&mut self) -> Result<FlatValue> {
        if self.scanner.peek() == Some(b'"') {
            let text = self.scanner.read_quoted_string()?;
            Ok(FlatValue::Text(text.to_string()))
        } else {
            Ok(FlatValue::Integer(self.scanner.read_integer()?))
        }
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.scanner.eat(byte) {
            Ok(())
        } else {
            Err(Error::InvalidInput)
        }
    }
}

/// A serde deserializer over a decoded [`FlatMap`].
///
/// The map is presented as a serde map, so it deserializes into structs,
/// `HashMap`s, `BTreeMap`s and [`FlatMap`] itself.
pub struct Deserializer {
    map: FlatMap,
}

impl Deserializer {
    #[must_use]
    pub fn new(map: FlatMap) -> Self {
        Deserializer { map }
    }

    /// Decodes `input` with default options and wraps the result.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `input` is not a valid flat object.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> Result<Self> {
        Decoder::new(input).decode().map(Deserializer::new)
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_map(MapDeserializer::new(self.map))
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, FlatValue>,
    value: Option<FlatValue>,
}

impl MapDeserializer {
    fn new(map: FlatMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(FlatValue::Text(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::InvalidInput),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct ValueDeserializer {
    value: FlatValue,
}

impl ValueDeserializer {
    fn new(value: FlatValue) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            FlatValue::Text(s) => visitor.visit_string(s),
            FlatValue::Integer(i) => visitor.visit_i64(i),
        }
    }

    // A present value is never null.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    // Unit variants only, spelled as text.
    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            FlatValue::Text(s) => visitor.visit_enum(s.into_deserializer()),
            FlatValue::Integer(_) => Err(Error::InvalidInput),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}
