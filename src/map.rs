//! Ordered map type for flat JSON objects.
//!
//! [`FlatMap`] wraps an [`IndexMap`] so that object entries keep insertion
//! order. This is a guarantee of the codec:
//!
//! - **Decode** inserts keys in the order they first appear in the text
//! - **Duplicate keys** overwrite the earlier value but keep its position
//! - **Encode** writes entries in iteration order
//!
//! As a result `encode(decode(encode(m)))` reproduces `encode(m)` exactly for
//! any map without `"` in its keys or text values.
//!
//! ## Examples
//!
//! ```rust
//! use serde_flatjson::{FlatMap, FlatValue};
//!
//! let mut map = FlatMap::new();
//! map.insert("name".to_string(), FlatValue::from("Alice"));
//! map.insert("age".to_string(), FlatValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::FlatValue;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// An insertion-ordered map of text keys to [`FlatValue`]s.
///
/// # Examples
///
/// ```rust
/// use serde_flatjson::{FlatMap, FlatValue};
///
/// let mut map = FlatMap::new();
/// map.insert("first".to_string(), FlatValue::from(1));
/// map.insert("second".to_string(), FlatValue::from(2));
/// map.insert("first".to_string(), FlatValue::from(3));
///
/// // Overwriting keeps the original position
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// assert_eq!(map.get("first"), Some(&FlatValue::Integer(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatMap(IndexMap<String, FlatValue>);

impl FlatMap {
    #[must_use]
    pub fn new() -> Self {
        FlatMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FlatMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the entry keeps its position.
    pub fn insert(&mut self, key: String, value: FlatValue) -> Option<FlatValue> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FlatValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, shifting later entries down to keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<FlatValue> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, FlatValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, FlatValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FlatValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, FlatValue>> for FlatMap {
    fn from(map: HashMap<String, FlatValue>) -> Self {
        FlatMap(map.into_iter().collect())
    }
}

impl From<FlatMap> for HashMap<String, FlatValue> {
    fn from(map: FlatMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for FlatMap {
    type Item = (String, FlatValue);
    type IntoIter = indexmap::map::IntoIter<String, FlatValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlatMap {
    type Item = (&'a String, &'a FlatValue);
    type IntoIter = indexmap::map::Iter<'a, String, FlatValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, FlatValue)> for FlatMap {
    fn from_iter<T: IntoIterator<Item = (String, FlatValue)>>(iter: T) -> Self {
        FlatMap(IndexMap::from_iter(iter))
    }
}

impl Serialize for FlatMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FlatMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct FlatMapVisitor;

        impl<'de> Visitor<'de> for FlatMapVisitor {
            type Value = FlatMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a flat object of string or integer values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = FlatMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, FlatValue>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FlatMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let map: FlatMap = vec![
            ("z".to_string(), FlatValue::from(1)),
            ("a".to_string(), FlatValue::from(2)),
            ("m".to_string(), FlatValue::from("x")),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map = FlatMap::new();
        map.insert("a".to_string(), FlatValue::from(1));
        map.insert("b".to_string(), FlatValue::from(2));
        map.insert("c".to_string(), FlatValue::from(3));

        assert_eq!(map.remove("b"), Some(FlatValue::Integer(2)));
        assert!(!map.contains_key("b"));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn test_hashmap_conversion() {
        let mut hm = HashMap::new();
        hm.insert("k".to_string(), FlatValue::from(7));
        let map = FlatMap::from(hm.clone());
        assert_eq!(map.get("k"), Some(&FlatValue::Integer(7)));

        let back: HashMap<String, FlatValue> = map.into();
        assert_eq!(back, hm);
    }

    #[test]
    fn test_deserialize_from_json_keeps_order() {
        let map: FlatMap = serde_json::from_str(r#"{"b": 1, "a": "two"}"#).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(map.get("a"), Some(&FlatValue::from("two")));

        assert!(serde_json::from_str::<FlatMap>(r#"{"a": [1]}"#).is_err());
        assert!(serde_json::from_str::<FlatMap>("[]").is_err());
    }
}
