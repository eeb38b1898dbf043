//! Flat JSON encoding.
//!
//! This module provides the [`Encoder`], which writes a [`FlatMap`] as text,
//! and [`FlatMapSerializer`], a serde serializer that turns any flat
//! `T: Serialize` (a struct of string/integer fields, a `HashMap<String, i64>`,
//! a [`FlatMap`]) into a [`FlatMap`].
//!
//! ## Output format
//!
//! `{` + entries joined by `", "` + `}`, each entry written as `"key": value`.
//! Text values are written between quotes; integers in plain base 10. An empty
//! map is `{}`.
//!
//! Keys and text values are written verbatim, without escaping. A key or value
//! containing `"` produces output that does not decode back.
//!
//! ## Usage
//!
//! ```rust
//! use serde_flatjson::{encode, flatjson};
//!
//! let map = flatjson!({ "a": 1, "b": "x" });
//! assert_eq!(encode(&map).unwrap(), r#"{"a": 1, "b": "x"}"#);
//! ```
//!
//! Values that are neither text nor integer are rejected:
//!
//! ```rust
//! use serde_flatjson::{encode, Error};
//! use std::collections::HashMap;
//!
//! let mut floats = HashMap::new();
//! floats.insert("ratio", 2.5);
//! assert_eq!(encode(&floats), Err(Error::UnsupportedType));
//! ```

use crate::{Error, FlatMap, FlatValue, Result};
use serde::ser::Impossible;
use serde::{ser, Serialize};

const ENTRY_SEPARATOR: &str = ", ";
const KEY_SEPARATOR: &str = ": ";

/// Writes a [`FlatMap`] as flat JSON text.
pub struct Encoder {
    output: String,
}

impl Encoder {
    #[must_use]
    pub fn new() -> Self {
        Encoder {
            output: String::new(),
        }
    }

    /// Appends `map` to the output buffer.
    pub fn write_map(&mut self, map: &FlatMap) {
        self.output.reserve(estimated_len(map));
        self.output.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.output.push_str(ENTRY_SEPARATOR);
            }
            self.write_text(key);
            self.output.push_str(KEY_SEPARATOR);
            self.write_value(value);
        }
        self.output.push('}');
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    #[inline]
    fn write_text(&mut self, s: &str) {
        self.output.push('"');
        self.output.push_str(s);
        self.output.push('"');
    }

    #[inline]
    fn write_value(&mut self, value: &FlatValue) {
        match value {
            FlatValue::Text(s) => self.write_text(s),
            FlatValue::Integer(i) => self.output.push_str(&i.to_string()),
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

fn estimated_len(map: &FlatMap) -> usize {
    // quotes + ": " + ", " around each entry, values sized generously
    map.iter()
        .map(|(k, v)| {
            k.len()
                + 6
                + match v {
                    FlatValue::Text(s) => s.len() + 2,
                    FlatValue::Integer(_) => 20,
                }
        })
        .sum::<usize>()
        + 2
}

/// Serializes a flat `T: Serialize` into a [`FlatMap`].
///
/// Only maps and structs are accepted at the top level. Their values must be
/// strings, chars, integers that fit in an `i64`, unit enum variants (written
/// as their name), or `Some`/newtype wrappers around one of those. Keys must
/// serialize as strings. Anything else fails with [`Error::UnsupportedType`].
pub struct FlatMapSerializer;

impl ser::Serializer for FlatMapSerializer {
    type Ok = FlatMap;
    type Error = Error;

    type SerializeSeq = Impossible<FlatMap, Error>;
    type SerializeTuple = Impossible<FlatMap, Error>;
    type SerializeTupleStruct = Impossible<FlatMap, Error>;
    type SerializeTupleVariant = Impossible<FlatMap, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = Impossible<FlatMap, Error>;

    fn serialize_bool(self, _v: bool) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_i8(self, _v: i8) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_i16(self, _v: i16) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_i32(self, _v: i32) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_i64(self, _v: i64) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_u8(self, _v: u8) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_u16(self, _v: u16) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_u32(self, _v: u32) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_u64(self, _v: u64) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_f32(self, _v: f32) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_f64(self, _v: f64) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_char(self, _v: char) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_str(self, _v: &str) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_none(self) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_some<T>(self, value: &T) -> Result<FlatMap>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<FlatMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<FlatMap>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<FlatMap>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::UnsupportedType)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::UnsupportedType)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::UnsupportedType)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::UnsupportedType)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::UnsupportedType)
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::UnsupportedType)
    }
}

pub struct SerializeMap {
    map: FlatMap,
    current_key: Option<String>,
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: FlatMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = FlatMap;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_flat_value(key)? {
            FlatValue::Text(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            FlatValue::Integer(_) => Err(Error::UnsupportedType),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self.current_key.take().ok_or(Error::UnsupportedType)?;
        self.map.insert(key, to_flat_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<FlatMap> {
        Ok(self.map)
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = FlatMap;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_flat_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<FlatMap> {
        Ok(self.map)
    }
}

/// Serializes a single scalar into a [`FlatValue`].
struct FlatValueSerializer;

impl ser::Serializer for FlatValueSerializer {
    type Ok = FlatValue;
    type Error = Error;

    type SerializeSeq = Impossible<FlatValue, Error>;
    type SerializeTuple = Impossible<FlatValue, Error>;
    type SerializeTupleStruct = Impossible<FlatValue, Error>;
    type SerializeTupleVariant = Impossible<FlatValue, Error>;
    type SerializeMap = Impossible<FlatValue, Error>;
    type SerializeStruct = Impossible<FlatValue, Error>;
    type SerializeStructVariant = Impossible<FlatValue, Error>;

    fn serialize_bool(self, _v: bool) -> Result<FlatValue> {
        Err(Error::UnsupportedType)
    }

    fn serialize_i8(self, v: i8) -> Result<FlatValue> {
        Ok(FlatValue::Integer(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<FlatValue> {
        Ok(FlatValue::Integer(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<FlatValue> {
        Ok(FlatValue::Integer(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<FlatValue> {
        Ok(FlatValue::Integer(v))
    }

    fn serialize_i128(self, v: i128) -> Result<FlatValue> {
        i64::try_from(v)
            .map(FlatValue::Integer)
            .map_err(|_| Error::UnsupportedType)
    }

    fn serialize_u8(self, v: u8) -> Result<FlatValue> {
        Ok(FlatValue::Integer(v as i64))
    }

    fn serialize_u16(self, v: u16) -> Result<FlatValue> {
        Ok(FlatValue::Integer(v as i64))
    }

    fn serialize_u32(self, v: u32) -> Result<FlatValue> {
        Ok(FlatValue::Integer(v as i64))
    }

    fn serialize_u64(self, v: u64) -> Result<FlatValue> {
        i64::try_from(v)
            .map(FlatValue::Integer)
            .map_err(|_| Error::UnsupportedType)
    }

    fn serialize_u128(self, v: u128) -> Result<FlatValue> {
        i64::try_from(v)
            .map(FlatValue::Integer)
            .map_err(|_| Error::UnsupportedType)
    }

    fn serialize_f32(self, _v: f32) -> Result<FlatValue> {
        Err(Error::UnsupportedType)
    }

    fn serialize_f64(self, _v: f64) -> Result<FlatValue> {
        Err(Error::UnsupportedType)
    }

    fn serialize_char(self, v: char) -> Result<FlatValue> {
        Ok(FlatValue::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<FlatValue> {
        Ok(FlatValue::Text(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<FlatValue> {
        Err(Error::UnsupportedType)
    }

    fn serialize_none(self) -> Result<FlatValue> {
        Err(Error::UnsupportedType)
    }

    fn serialize_some<T>(self, value: &T) -> Result<FlatValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<FlatValue> {
        Err(Error::UnsupportedType)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<FlatValue> {
        Err(Error::UnsupportedType)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<FlatValue> {
        Ok(FlatValue::Text(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<FlatValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<FlatValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::UnsupportedType)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::UnsupportedType)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::UnsupportedType)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::UnsupportedType)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::UnsupportedType)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::UnsupportedType)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::UnsupportedType)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::UnsupportedType)
    }
}

fn to_flat_value<T: Serialize + ?Sized>(value: &T) -> Result<FlatValue> {
    value.serialize(FlatValueSerializer)
}
