//! Cache Store Module
//!
//! Default [`Cache`] implementation that delegates to one owned
//! [`ConcurrentMap`].

use std::hash::Hash;

use crate::cache::Cache;
use crate::map::ConcurrentMap;

// == Cache Store ==
/// Cache facade over a single concurrent map.
///
/// The map is created with the store and never handed out, so all access to it
/// goes through the four [`Cache`] operations.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Backing storage
    data: ConcurrentMap<K, V>,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash,
{
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            data: ConcurrentMap::new(),
        }
    }
}

impl<K, V> Default for CacheStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> for CacheStore<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn put(&self, key: K, value: V) {
        self.data.set(key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        self.data.get(key)
    }

    fn delete(&self, key: &K) {
        self.data.delete(key);
    }

    fn clear(&self) {
        self.data.clear();
    }
}
