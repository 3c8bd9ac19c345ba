//! Distance and rank mappings
//!
//! Both pipeline outputs are mappings of mappings: query → candidate →
//! value. Iteration order is the insertion order, which the builders keep
//! equal to the input list order; the dumps and the tie-breaking of the
//! ranker both rely on that, so a plain `HashMap` would not do.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A string-keyed map that preserves insertion order
///
/// Serializes as a JSON object whose keys appear in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

/// Candidate → distance, in candidate-list order
pub type DistanceMapping = OrderedMap<f32>;
/// Query → candidate → distance
pub type DistanceMatrix = OrderedMap<DistanceMapping>;
/// Candidate → rank (1..N), in candidate-list order
pub type RankMapping = OrderedMap<u32>;
/// Query → candidate → rank
pub type RankMatrix = OrderedMap<RankMapping>;

impl<V> OrderedMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a key, replacing the value in place if the key exists
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V> {
    marker: std::marker::PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string-keyed map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("zebra", 1);
        map.insert("apple", 2);
        map.insert("mango", 3);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = OrderedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("a", 9);
        assert_eq!(map.get("a"), Some(&9));
        assert_eq!(map.len(), 2);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_json_object_order_and_roundtrip() {
        let mut inner = OrderedMap::new();
        inner.insert("B", 1u32);
        inner.insert("A", 2u32);
        let mut matrix: OrderedMap<OrderedMap<u32>> = OrderedMap::new();
        matrix.insert("query one", inner);

        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, r#"{"query one":{"B":1,"A":2}}"#);

        let parsed: OrderedMap<OrderedMap<u32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, matrix);
    }

    #[test]
    fn test_float_values_roundtrip() {
        let mut map: OrderedMap<f32> = OrderedMap::new();
        map.insert("x", 0.25);
        let json = serde_json::to_string(&map).unwrap();
        let parsed: OrderedMap<f32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }
}
