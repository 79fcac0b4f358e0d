//! Embedded typed key-value storage
//!
//! `KeyValueStore<V>` is the single storage primitive of this crate: an
//! ordered map from opaque string identifiers to cloneable values. Uses
//! RwLock for thread-safe access; every read hands out a clone, never a
//! reference into the map, so a mutated value must be re-inserted to
//! persist the change.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Ordered key-value collection keyed by externally generated identifiers.
///
/// The store never generates or validates keys; callers supply them from an
/// [`IdGenerator`](crate::core::id::IdGenerator). Cloning the store clones
/// the handle, not the data: all clones share the same underlying map.
#[derive(Clone)]
pub struct KeyValueStore<V> {
    data: Arc<RwLock<BTreeMap<String, V>>>,
}

impl<V: Clone> KeyValueStore<V> {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Get a clone of the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        self.data.read().unwrap().get(key).cloned()
    }

    /// Insert `value` under `key`, returning the previous value if one
    /// existed (upsert semantics — overwrites silently).
    pub fn insert(&self, key: impl Into<String>, value: V) -> Option<V> {
        self.data.write().unwrap().insert(key.into(), value)
    }

    /// Remove the entry under `key`, returning the removed value. Removing
    /// an absent key is a no-op, not an error.
    pub fn remove(&self, key: &str) -> Option<V> {
        self.data.write().unwrap().remove(key)
    }

    /// Whether an entry exists under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.read().unwrap().contains_key(key)
    }

    /// Snapshot of all current values in key order.
    ///
    /// The returned vector is a point-in-time copy; subsequent mutations of
    /// the store do not affect it.
    pub fn values(&self) -> Vec<V> {
        self.data.read().unwrap().values().cloned().collect()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.data.read().unwrap().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.read().unwrap().is_empty()
    }
}

impl<V: Clone> Default for KeyValueStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_get_round_trip() {
        let store = KeyValueStore::new();

        assert_eq!(store.insert("a", 1), None);
        assert_eq!(store.get("a"), Some(1));
    }

    #[test]
    fn test_insert_returns_previous_value() {
        let store = KeyValueStore::new();

        store.insert("a", 1);
        assert_eq!(store.insert("a", 2), Some(1));
        assert_eq!(store.get("a"), Some(2));
    }

    #[test]
    fn test_remove_then_get_returns_none() {
        let store = KeyValueStore::new();

        store.insert("a", 1);
        assert_eq!(store.remove("a"), Some(1));
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let store: KeyValueStore<i32> = KeyValueStore::new();

        assert_eq!(store.remove("missing"), None);
    }

    #[test]
    fn test_values_are_key_ordered() {
        let store = KeyValueStore::new();

        store.insert("c", 3);
        store.insert("a", 1);
        store.insert("b", 2);

        assert_eq!(store.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_values_is_a_snapshot() {
        let store = KeyValueStore::new();

        store.insert("a", 1);
        let snapshot = store.values();

        store.insert("b", 2);
        store.remove("a");

        assert_eq!(snapshot, vec![1]);
        assert_eq!(store.values(), vec![2]);
    }

    #[test]
    fn test_clones_share_the_same_map() {
        let store = KeyValueStore::new();
        let other = store.clone();

        store.insert("a", 1);
        assert_eq!(other.get("a"), Some(1));
    }

    #[test]
    fn test_reads_return_copies_not_aliases() {
        let store = KeyValueStore::new();
        store.insert("a", vec![1, 2]);

        let mut copy = store.get("a").unwrap();
        copy.push(3);

        // The stored value is untouched until re-inserted
        assert_eq!(store.get("a"), Some(vec![1, 2]));

        store.insert("a", copy);
        assert_eq!(store.get("a"), Some(vec![1, 2, 3]));
    }
}
