use std::collections::{hash_map, HashMap};
use std::fmt::Display;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::Value,
};

pub struct MapOpts<V = Value> {
    pub initial: Option<HashMap<String, V>>,
    pub capacity: Option<usize>,
}

impl<V> Default for MapOpts<V> {
    fn default() -> Self {
        Self {
            initial: None,
            capacity: None,
        }
    }
}

/// A string-keyed map.
///
/// Enumeration order is whatever the underlying `HashMap` yields. `keys()` and
/// `values()` line up with each other as long as the map is not mutated in between.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssociativeMap<V = Value> {
    entries: HashMap<String, V>,
}

impl<V> AssociativeMap<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with_opts(opts: MapOpts<V>) -> Self {
        let capacity = opts.capacity.unwrap_or(0);

        let entries = match opts.initial {
            Some(mut initial) => {
                initial.reserve(capacity);
                initial
            }
            None => HashMap::with_capacity(capacity),
        };

        Self { entries }
    }

    /// Maps `key` to `value`, returning the value it replaced.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        trace!("put {key:?}");
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub fn require(&self, key: &str) -> Result<&V> {
        self.entries
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.values().any(|v| v == value)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn clear(&mut self) {
        trace!("clear {} entries", self.entries.len());
        self.entries.clear();
    }

    /// Removes `key` whatever its current value is.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            trace!("remove {key:?}");
        }
        removed
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries.values().cloned().collect()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, V> {
        self.entries.iter()
    }
}

impl<V> Default for AssociativeMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<HashMap<String, V>> for AssociativeMap<V> {
    fn from(entries: HashMap<String, V>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for AssociativeMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for AssociativeMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> IntoIterator for AssociativeMap<V> {
    type Item = (String, V);
    type IntoIter = hash_map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a AssociativeMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = hash_map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Debug rendering only: quotes are not escaped.
impl<V: Display> Display for AssociativeMap<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "'{key}':'{value}'")?;
        }
        write!(f, "}}")
    }
}
