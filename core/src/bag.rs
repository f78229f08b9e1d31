//! Generic ordered key-value container.
//!
//! # Design
//! `ParameterBag<V>` wraps an `IndexMap` so iteration follows insertion
//! order and overwriting a key keeps its original position. Absent keys
//! resolve to `None` rather than a null sentinel; callers pick their own
//! fallback with `unwrap_or`. Every operation is total — the bag has no
//! error paths.
//!
//! Two aliases cover the common instantiations: `HeaderBag` for HTTP
//! header name/value pairs and `ParamBag` for heterogeneous JSON payload
//! values (`serde_json::Value` is the closed set of variants).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered string-keyed container with optional-on-miss lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterBag<V> {
    entries: IndexMap<String, V>,
}

/// HTTP header name/value pairs, serialized verbatim onto the wire.
pub type HeaderBag = ParameterBag<String>;

/// Request payload fields; serializes as a JSON object.
pub type ParamBag = ParameterBag<serde_json::Value>;

impl<V> ParameterBag<V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The full key-value mapping, in insertion order.
    pub fn all(&self) -> &IndexMap<String, V> {
        &self.entries
    }

    /// The stored value, or `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert or overwrite. Overwriting keeps the key's iteration position.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), value);
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key, returning its value. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for ParameterBag<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for ParameterBag<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for ParameterBag<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn set_then_get_returns_value() {
        let mut bag = ParameterBag::new();
        bag.set("name", "x");
        assert_eq!(bag.get("name"), Some(&"x"));
        assert!(bag.has("name"));
    }

    #[test]
    fn get_missing_is_none() {
        let bag: ParameterBag<i32> = ParameterBag::new();
        assert_eq!(bag.get("missing"), None);
        assert_eq!(bag.get("missing").copied().unwrap_or(7), 7);
    }

    #[test]
    fn set_overwrites_without_reordering() {
        let mut bag: ParameterBag<i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        bag.set("a", 10);
        let keys: Vec<&str> = bag.all().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(bag.get("a"), Some(&10));
    }

    #[test]
    fn remove_then_has_is_false() {
        let mut bag = ParameterBag::new();
        bag.set("k", 1);
        assert_eq!(bag.remove("k"), Some(1));
        assert!(!bag.has("k"));
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let mut bag: ParameterBag<i32> = ParameterBag::new();
        assert_eq!(bag.remove("never-set"), None);
        assert!(bag.is_empty());
    }

    #[test]
    fn all_reflects_inserts_minus_removes() {
        let mut bag: ParameterBag<i32> = ParameterBag::new();
        bag.set("a", 1);
        bag.set("b", 2);
        bag.set("c", 3);
        bag.remove("b");
        let pairs: Vec<(&str, i32)> = bag.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(pairs, vec![("a", 1), ("c", 3)]);
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn seeded_bag_extends_in_order() {
        let mut bag: ParamBag = [("a", json!(1))].into_iter().collect();
        bag.set("b", json!(2));
        let pairs: Vec<(&str, &Value)> = bag.iter().collect();
        assert_eq!(pairs, vec![("a", &json!(1)), ("b", &json!(2))]);
    }

    #[test]
    fn param_bag_serializes_as_json_object() {
        let bag: ParamBag = [("name", json!("x")), ("count", json!(2))]
            .into_iter()
            .collect();
        let encoded = serde_json::to_string(&bag).unwrap();
        assert_eq!(encoded, r#"{"name":"x","count":2}"#);
    }

    #[test]
    fn header_bag_roundtrips_through_json() {
        let bag: HeaderBag = [("Authorization", "Bearer X".to_string())]
            .into_iter()
            .collect();
        let encoded = serde_json::to_string(&bag).unwrap();
        let back: HeaderBag = serde_json::from_str(&encoded).unwrap();
        assert_eq!(back, bag);
    }
}
