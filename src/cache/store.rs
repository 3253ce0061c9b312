//! TTL keyed store.
//!
//! Expiry is checked on every read, so an entry the sweep has not reached yet
//! is still reported as a miss once its TTL has passed.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cached value with the instant it stops being valid.
///
/// `expires_at` is `None` when the TTL reaches past what `Instant` can hold;
/// such an entry never expires.
#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Thread-safe map from a string key to a value with a per-entry expiry.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    default_ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    /// Create an empty cache; [`TtlCache::insert`] uses `default_ttl`.
    pub fn new(default_ttl: Duration) -> Self {
        TtlCache {
            entries: RwLock::new(HashMap::new()),
            default_ttl,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Live value for `key`, `None` if absent or expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value.clone())
    }

    /// Store `value` under `key` for `ttl`, replacing any previous entry.
    pub fn set(&self, key: &str, value: V, ttl: Duration) {
        let expires_at = Instant::now().checked_add(ttl);
        self.entries
            .write()
            .insert(key.to_string(), CacheEntry { value, expires_at });
    }

    /// Store `value` with the default TTL.
    pub fn insert(&self, key: &str, value: V) {
        self.set(key, value, self.default_ttl);
    }

    /// Drop the entry for `key`, returns true if one was present.
    pub fn remove(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Physically remove expired entries, returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Number of stored entries, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let entries = self.entries.read();
        let expired = entries.values().filter(|e| e.is_expired(now)).count();
        CacheStats {
            total_entries: entries.len(),
            expired_entries: expired,
            live_entries: entries.len() - expired,
        }
    }
}

/// Snapshot of cache occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub live_entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: Duration = Duration::from_secs(3600);

    #[test]
    fn test_set_get() {
        let cache = TtlCache::new(LONG);
        cache.insert("prod", vec![1, 2, 3]);
        assert_eq!(cache.get("prod"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_miss() {
        let cache: TtlCache<u32> = TtlCache::new(LONG);
        assert_eq!(cache.get("nope"), None);
    }

    #[test]
    fn test_expired_entry_is_a_miss_before_purge() {
        let cache = TtlCache::new(LONG);
        cache.set("prod", 1, Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(cache.get("prod"), None);
        // Not physically evicted yet
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let cache = TtlCache::new(LONG);
        cache.set("prod", 1, Duration::ZERO);
        assert_eq!(cache.get("prod"), None);
    }

    #[test]
    fn test_huge_ttl_never_expires() {
        let cache = TtlCache::new(Duration::from_secs(u64::MAX));
        cache.insert("prod", 1);
        assert_eq!(cache.get("prod"), Some(1));
        assert_eq!(cache.purge_expired(), 0);
        assert_eq!(cache.stats().live_entries, 1);
    }

    #[test]
    fn test_set_replaces_and_resets_expiry() {
        let cache = TtlCache::new(LONG);
        cache.set("prod", 1, Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(10));
        cache.set("prod", 2, LONG);
        assert_eq!(cache.get("prod"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_purge_expired() {
        let cache = TtlCache::new(LONG);
        cache.set("old", 1, Duration::from_millis(1));
        cache.insert("new", 2);
        std::thread::sleep(Duration::from_millis(10));

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.expired_entries, 1);
        assert_eq!(stats.live_entries, 1);

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("new"), Some(2));
    }

    #[test]
    fn test_remove_and_clear() {
        let cache = TtlCache::new(LONG);
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert!(cache.remove("a"));
        assert!(!cache.remove("a"));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_access() {
        let cache = std::sync::Arc::new(TtlCache::new(LONG));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    let key = format!("cluster-{}", i % 2);
                    for n in 0..100 {
                        cache.insert(&key, n);
                        assert!(cache.get(&key).is_some());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }
        assert_eq!(cache.len(), 2);
    }
}
