//! Cache Capability Trait
//!
//! The four-operation interface call sites program against. Any thread-safe
//! backend can implement it; the crate provides [`CacheStore`] and a direct
//! implementation on [`ConcurrentMap`].
//!
//! [`CacheStore`]: crate::cache::CacheStore

use std::hash::Hash;

use crate::map::ConcurrentMap;

// == Cache Trait ==
/// Minimal put/get/delete/clear capability over a key/value store.
///
/// The trait is object safe, so a shared cache is usually passed around as
/// `Arc<dyn Cache<K, V>>`. None of the operations can fail: absence is
/// reported as `None` and deleting or clearing absent data is a no-op.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use shared_cache::cache::{Cache, CacheStore};
///
/// let cache: Arc<dyn Cache<u32, String>> = Arc::new(CacheStore::<u32, String>::new());
/// cache.put(1, "one".to_string());
/// assert_eq!(cache.get(&1).as_deref(), Some("one"));
/// ```
pub trait Cache<K, V>: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    fn put(&self, key: K, value: V);

    /// Returns the value stored under `key`, or `None` if it does not exist.
    fn get(&self, key: &K) -> Option<V>;

    /// Removes the value stored under `key`.
    fn delete(&self, key: &K);

    /// Removes every value.
    fn clear(&self);
}

impl<K, V> Cache<K, V> for ConcurrentMap<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn put(&self, key: K, value: V) {
        ConcurrentMap::set(self, key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        ConcurrentMap::get(self, key)
    }

    fn delete(&self, key: &K) {
        ConcurrentMap::delete(self, key);
    }

    fn clear(&self) {
        ConcurrentMap::clear(self);
    }
}
