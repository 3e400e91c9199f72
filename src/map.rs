//! Ordered map type for object values.
//!
//! [`ValueMap`] wraps an [`IndexMap`] so object members are stringified in
//! insertion order. Two renders of the same object therefore produce the
//! same literal text, which matters when the SQL ends up in logs, plan
//! caches or snapshot tests.
//!
//! ## Examples
//!
//! ```rust
//! use pg_escape::{ValueMap, Value};
//!
//! let mut map = ValueMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap(IndexMap<String, crate::Value>);

impl ValueMap {
    /// Creates an empty `ValueMap`.
    #[must_use]
    pub fn new() -> Self {
        ValueMap(IndexMap::new())
    }

    /// Creates an empty `ValueMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned
    /// and the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_escape::{ValueMap, Value};
    ///
    /// let mut map = ValueMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for ValueMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        ValueMap(map.into_iter().collect())
    }
}

impl IntoIterator for ValueMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        ValueMap(IndexMap::from_iter(iter))
    }
}
