//! Concurrent Map
//!
//! A `HashMap` behind one `parking_lot::RwLock`. Read-class operations take the
//! lock in shared mode, write-class operations take it exclusively, so every
//! point operation is linearizable and every bulk read is a consistent
//! snapshot.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::mem;

use parking_lot::RwLock;
use tracing::trace;

// == Concurrent Map ==
/// Thread-safe generic map from `K` to `V`.
///
/// Share an instance between threads by wrapping it in an `Arc`; there is no
/// process-wide instance.
///
/// # Example
/// ```
/// use shared_cache::map::ConcurrentMap;
///
/// let map = ConcurrentMap::new();
/// map.set("answer", 42);
/// assert_eq!(map.get("answer"), Some(42));
/// assert!(map.contains("answer"));
/// ```
#[derive(Debug)]
pub struct ConcurrentMap<K, V> {
    /// Key-value storage, replaced wholesale on `clear`
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> ConcurrentMap<K, V>
where
    K: Eq + Hash,
{
    // == Constructors ==
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an empty map with room for at least `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    // == Get ==
    /// Returns a copy of the value mapped to `key`, or `None` if absent.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.entries.read().get(key).cloned()
    }

    // == Set ==
    /// Inserts `value` under `key`, replacing any previous value.
    pub fn set(&self, key: K, value: V) {
        self.entries.write().insert(key, value);
    }

    // == Delete ==
    /// Removes the entry for `key`. Absent keys are ignored.
    pub fn delete<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.write().remove(key);
    }

    // == Clear ==
    /// Removes every entry.
    ///
    /// The storage is swapped for a fresh empty map while the write lock is
    /// held; the old entries are dropped after the lock is released.
    pub fn clear(&self) {
        let discarded = mem::take(&mut *self.entries.write());
        trace!(entries = discarded.len(), "Cleared concurrent map");
    }

    // == Snapshots ==
    /// Returns a copy of every key currently in the map.
    ///
    /// The order is unspecified. The returned vector does not alias the map and
    /// stays valid after further mutation.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.entries.read().keys().cloned().collect()
    }

    /// Returns a copy of every value currently in the map.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries.read().values().cloned().collect()
    }

    /// Returns a copy of every key/value pair, taken under a single read lock.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.entries
            .read()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // == Contains ==
    /// Returns true if `key` is mapped, without copying its value.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.read().contains_key(key)
    }
}

impl<K, V> Default for ConcurrentMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_map_new() {
        let map: ConcurrentMap<u32, u32> = ConcurrentMap::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(map.keys().is_empty());
        assert!(map.values().is_empty());
    }

    #[test]
    fn test_map_default_and_capacity() {
        let map: ConcurrentMap<u32, u32> = ConcurrentMap::default();
        assert!(map.is_empty());

        let map: ConcurrentMap<u32, u32> = ConcurrentMap::with_capacity(64);
        assert!(map.is_empty());
    }

    #[test]
    fn test_map_is_send_and_sync() {
        assert_send_sync::<ConcurrentMap<String, Vec<u8>>>();
    }

    #[test]
    fn test_map_set_and_get() {
        let map: ConcurrentMap<i32, i32> = ConcurrentMap::new();
        map.set(10, 100);

        assert_eq!(map.get(&10), Some(100));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_map_get_nonexistent() {
        let map: ConcurrentMap<u32, u32> = ConcurrentMap::new();
        assert_eq!(map.get(&7), None);
        assert!(!map.contains(&7));
    }

    #[test]
    fn test_map_borrowed_lookup() {
        let map = ConcurrentMap::new();
        map.set("key1".to_string(), "value1".to_string());

        assert_eq!(map.get("key1"), Some("value1".to_string()));
        assert!(map.contains("key1"));

        map.delete("key1");
        assert!(!map.contains("key1"));
    }

    #[test]
    fn test_map_overwrite() {
        let map = ConcurrentMap::new();
        map.set("key1", "value1");
        map.set("key1", "value2");

        assert_eq!(map.get("key1"), Some("value2"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_map_delete() {
        let map: ConcurrentMap<i32, &str> = ConcurrentMap::new();
        map.set(1, "one");
        map.delete(&1);

        assert_eq!(map.get(&1), None);
        assert!(!map.contains(&1));
        assert!(map.is_empty());
    }

    #[test]
    fn test_map_delete_nonexistent() {
        let map: ConcurrentMap<i32, &str> = ConcurrentMap::new();
        map.set(1, "one");
        map.delete(&2);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some("one"));
    }

    #[test]
    fn test_map_clear() {
        let map: ConcurrentMap<i32, i32> = ConcurrentMap::new();
        for i in 0..100 {
            map.set(i, i * 2);
        }

        map.clear();

        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        for i in 0..100 {
            assert_eq!(map.get(&i), None);
        }

        // Still usable after clear
        map.set(5, 10);
        assert_eq!(map.get(&5), Some(10));
    }

    #[test]
    fn test_map_clear_empty_is_noop() {
        let map: ConcurrentMap<u32, u32> = ConcurrentMap::new();
        map.clear();
        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn test_map_keys_and_values() {
        let map: ConcurrentMap<i32, i32> = ConcurrentMap::new();
        map.set(10, 100);
        map.set(30, 50);
        map.set(20000, 56000);

        let keys: HashSet<_> = map.keys().into_iter().collect();
        assert_eq!(keys, HashSet::from([10, 30, 20000]));

        let mut values = map.values();
        values.sort_unstable();
        assert_eq!(values, vec![50, 100, 56000]);
    }

    #[test]
    fn test_map_snapshot_is_detached() {
        let map = ConcurrentMap::new();
        map.set("a", 1);
        map.set("b", 2);

        let keys = map.keys();
        let values = map.values();
        let entries = map.entries();

        map.delete("a");
        map.set("c", 3);
        map.clear();

        assert_eq!(keys.len(), 2);
        assert_eq!(values.len(), 2);
        assert_eq!(entries.len(), 2);
        assert!(entries.contains(&("a", 1)));
        assert!(entries.contains(&("b", 2)));
    }

    #[test]
    fn test_map_holds_container_values() {
        let map = ConcurrentMap::new();
        map.set("list", vec![1, 2, 3]);

        let mut copy = map.get("list").unwrap();
        copy.push(4);

        assert_eq!(map.get("list"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_map_shared_across_threads() {
        let map: Arc<ConcurrentMap<u32, u32>> = Arc::new(ConcurrentMap::new());

        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let map = Arc::clone(&map);
                thread::spawn(move || {
                    for i in 0..100u32 {
                        map.set(t * 1000 + i, i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(map.len(), 400);
        assert_eq!(map.get(&3099), Some(99));
    }

    #[test]
    fn test_map_example_scenario() {
        let map: ConcurrentMap<i32, i32> = ConcurrentMap::new();
        map.set(10, 100);
        map.set(30, 50);
        map.set(20000, 56000);

        assert_eq!(map.get(&10), Some(100));
        map.delete(&10);
        assert_eq!(map.get(&10), None);

        map.clear();
        assert_eq!(map.get(&30), None);
        assert_eq!(map.len(), 0);
    }
}
