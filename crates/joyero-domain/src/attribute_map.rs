//! Attribute map - sparse, insertion-ordered attribute container

use crate::attribute::AttributeKey;

/// Sparse map from [`AttributeKey`] to string values
///
/// Insertion-ordered so serialization is reproducible; inserting an
/// existing key replaces the value in place (last writer wins) without
/// moving the entry. Absent keys are never materialized: a classifier
/// that matched nothing contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(AttributeKey, String)>,
}

impl AttributeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. Last writer wins; the entry keeps its
    /// original position when overwritten.
    pub fn insert(&mut self, key: AttributeKey, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get the value for a key, if present
    pub fn get(&self, key: AttributeKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: AttributeKey) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Fold another map in, entry by entry, with the same last-writer-wins
    /// rule as [`insert`](Self::insert)
    pub fn merge(&mut self, other: AttributeMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(AttributeKey, String)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (AttributeKey, String)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
