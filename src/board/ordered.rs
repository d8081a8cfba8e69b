//! Insertion-ordered string-keyed map used for input sections whose order
//! drives output order (nations, unit buckets, supply-center lists).

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error as _, MapAccess, Visitor};

/// A map that iterates in the order entries were inserted.
///
/// Keys are unique; duplicate keys in an input document are rejected at
/// deserialization time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        OrderedMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Appends an entry. Returns the value back if the key is already present.
    pub fn insert(&mut self, key: String, value: V) -> Result<(), V> {
        if self.index.contains_key(&key) {
            return Err(value);
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    /// Later duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            let _ = map.insert(k, v);
        }
        map
    }
}

struct OrderedMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            if map.contains_key(&key) {
                return Err(A::Error::custom(format!("duplicate key '{}'", key)));
            }
            let _ = map.insert(key, value);
        }
        Ok(map)
    }

    // An empty YAML section (`units:`) reads as null.
    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderedMap::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let map: OrderedMap<u32> =
            serde_yaml::from_str("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(map.get("alpha"), Some(&2));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let mut map = OrderedMap::new();
        assert!(map.insert("a".to_string(), 1).is_ok());
        assert_eq!(map.insert("a".to_string(), 2), Err(2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn null_section_is_empty() {
        let map: OrderedMap<u32> = serde_yaml::from_str("~").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn json_objects_keep_order() {
        let map: OrderedMap<Vec<String>> =
            serde_json::from_str(r#"{"R": ["Mos"], "A": ["Vie", "Bud"]}"#).unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["R", "A"]);
    }
}
