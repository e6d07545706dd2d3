//! Thread-safe cache handle with hit/miss accounting

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Shared cache combining the LRU core with statistics
///
/// The key index and the recency list must move together, so every
/// operation takes one exclusive lock over the core (reads also reorder,
/// which is why `get` locks for writing). Clones are cheap handles onto
/// the same cache and the same counters.
pub struct SharedCache<K, V> {
    /// LRU core guarded as a unit
    inner: Arc<RwLock<LruCache<K, V>>>,

    /// Hit/miss/insert/evict counters
    stats: Arc<CacheStats>,

    /// Cache capacity
    capacity: usize,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stats: Arc::clone(&self.stats),
            capacity: self.capacity,
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new shared cache with the given capacity
    ///
    /// # Errors
    /// Returns [`crate::Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(LruCache::new(capacity)?)),
            stats: Arc::new(CacheStats::new()),
            capacity,
        })
    }

    /// Get a value, recording a hit or a miss
    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.write();
        match cache.get(key) {
            Some(value) => {
                let value = value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert a value, returning the entry evicted to make room
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        let mut cache = self.inner.write();
        let evicted = cache.put(key, value);
        self.stats.record_insert();
        if evicted.is_some() {
            self.stats.record_eviction();
        }
        evicted
    }

    /// Get a value, computing and caching it on a miss
    ///
    /// The lock is held across the fill, so concurrent callers asking for
    /// the same absent key compute it once. Keep `fill` cheap.
    pub fn get_or_insert_with<F>(&self, key: K, fill: F) -> V
    where
        F: FnOnce() -> V,
    {
        let mut cache = self.inner.write();
        if let Some(value) = cache.get(&key) {
            let value = value.clone();
            self.stats.record_hit();
            return value;
        }

        self.stats.record_miss();
        let value = fill();
        let evicted = cache.put(key, value.clone());
        self.stats.record_insert();
        if evicted.is_some() {
            self.stats.record_eviction();
        }

        value
    }

    /// Check whether a key is present without touching the recency order
    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    /// Remove a key, returning its value if it was present
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get the current number of cached entries
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Get the cache capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) {
        let mut cache = self.inner.write();
        cache.clear();
        self.stats.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_basic() {
        let cache = SharedCache::new(10).unwrap();

        cache.put("k", 42);

        assert_eq!(cache.get(&"k"), Some(42));
        assert_eq!(cache.stats().hits(), 1);
        assert_eq!(cache.stats().misses(), 0);
    }

    #[test]
    fn test_shared_zero_capacity_rejected() {
        assert!(SharedCache::<u32, u32>::new(0).is_err());
    }

    #[test]
    fn test_shared_miss_recorded() {
        let cache: SharedCache<&str, i32> = SharedCache::new(10).unwrap();

        assert_eq!(cache.get(&"absent"), None);
        assert_eq!(cache.stats().misses(), 1);
        assert_eq!(cache.stats().hit_ratio(), 0.0);
    }

    #[test]
    fn test_shared_eviction_counted() {
        let cache = SharedCache::new(2).unwrap();

        cache.put(1, "a");
        cache.put(2, "b");
        let evicted = cache.put(3, "c");

        assert_eq!(evicted, Some((1, "a")));
        assert_eq!(cache.stats().evictions(), 1);
        assert_eq!(cache.stats().insertions(), 3);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_shared_get_or_insert_with() {
        let cache = SharedCache::new(10).unwrap();

        let value = cache.get_or_insert_with(7, || "computed".to_string());
        assert_eq!(value, "computed");
        assert_eq!(cache.stats().misses(), 1);

        // Second call hits the cached value; the closure must not run
        let value = cache.get_or_insert_with(7, || unreachable!());
        assert_eq!(value, "computed");
        assert_eq!(cache.stats().hits(), 1);
    }

    #[test]
    fn test_shared_clear_resets_stats() {
        let cache = SharedCache::new(10).unwrap();

        cache.put(1, "a");
        cache.get(&1);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.stats().hits(), 0);
        assert_eq!(cache.stats().insertions(), 0);
    }

    #[test]
    fn test_shared_clone_shares_state() {
        let cache = SharedCache::new(10).unwrap();
        let handle = cache.clone();

        handle.put("k", 1);

        assert_eq!(cache.get(&"k"), Some(1));
        assert_eq!(handle.stats().hits(), 1);
    }

    #[test]
    fn test_shared_concurrent_access() {
        use std::thread;

        let cache = SharedCache::new(64).unwrap();
        let mut handles = Vec::new();

        for t in 0..4u64 {
            let cache = cache.clone();
            handles.push(thread::spawn(move || {
                for i in 0..100u64 {
                    let key = t * 100 + i;
                    cache.put(key, key * 2);
                    assert_eq!(cache.get(&key), Some(key * 2));
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 64);
        assert_eq!(cache.stats().insertions(), 400);
    }
}
