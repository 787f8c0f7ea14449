//! Response cache
//!
//! Decoded response bodies keyed by the URL they were fetched from. The
//! client owns one cache instance for its whole lifetime; there is no
//! process-wide cache.

use dashmap::DashMap;
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Entry count at which `set` first sweeps out expired entries
pub const DEFAULT_PURGE_THRESHOLD: usize = 1024;

/// Key-value store with per-entry time-to-live
///
/// Implementations must tolerate concurrent `set` calls for the same key;
/// the last write wins.
pub trait ResponseCache: Send + Sync {
    /// Live entry for `key`, if any
    fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key` for `ttl`
    fn set(&self, key: &str, value: Value, ttl: Duration);

    /// Drop a single entry
    fn remove(&self, key: &str) -> Option<Value>;

    /// Drop every entry
    fn clear(&self);

    /// Number of live entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct CacheEntry {
    value: Value,
    /// `None` when the TTL overflows the clock
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_live(&self) -> bool {
        self.expires_at.map_or(true, |at| Instant::now() < at)
    }
}

/// In-memory cache
///
/// Expired entries are evicted when read. Entries that are never read again
/// are swept by `set` once the map outgrows its purge threshold; the
/// threshold then doubles relative to what survived the sweep.
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
    purge_threshold: usize,
    next_purge_at: AtomicUsize,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::with_purge_threshold(DEFAULT_PURGE_THRESHOLD)
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_purge_threshold(threshold: usize) -> Self {
        let threshold = threshold.max(1);
        Self {
            entries: DashMap::new(),
            purge_threshold: threshold,
            next_purge_at: AtomicUsize::new(threshold),
        }
    }

    fn maybe_purge(&self) {
        let len = self.entries.len();
        if len < self.next_purge_at.load(Ordering::Relaxed) {
            return;
        }

        let dropped = self.purge_expired();
        let next = self.purge_threshold.max(self.entries.len() * 2);
        self.next_purge_at.store(next, Ordering::Relaxed);
        tracing::trace!("Purged {} expired cache entries, next sweep at {}", dropped, next);
    }

    /// Evict every expired entry, returning how many were dropped
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live());
        before - self.entries.len()
    }
}

impl fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_live() => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            tracing::trace!("Evicting expired cache entry {}", key);
            self.entries.remove_if(key, |_, entry| !entry.is_live());
        }
        None
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now().checked_add(ttl),
        };
        self.entries.insert(key.to_string(), entry);
        self.maybe_purge();
    }

    fn remove(&self, key: &str) -> Option<Value> {
        self.entries.remove(key).map(|(_, entry)| entry.value)
    }

    fn clear(&self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_live()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://pokeapi.co/api/v2/berry/cheri";

    #[test]
    fn test_set_then_get_returns_value() {
        let cache = MemoryCache::new();
        cache.set(URL, json!({"name": "cheri"}), Duration::from_secs(60));

        assert_eq!(cache.get(URL), Some(json!({"name": "cheri"})));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss_on_unknown_key() {
        let cache = MemoryCache::new();
        assert!(cache.get(URL).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_expired_entry_is_evicted_on_read() {
        let cache = MemoryCache::new();
        cache.set(URL, json!(1), Duration::ZERO);

        assert!(cache.get(URL).is_none());
        assert_eq!(cache.entries.len(), 0);
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let cache = MemoryCache::new();
        cache.set(URL, json!(1), Duration::from_secs(60));
        cache.set(URL, json!(2), Duration::from_secs(60));

        assert_eq!(cache.get(URL), Some(json!(2)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_huge_ttl_never_expires() {
        let cache = MemoryCache::new();
        cache.set(URL, json!(true), Duration::MAX);
        assert_eq!(cache.get(URL), Some(json!(true)));
    }

    #[test]
    fn test_purge_and_clear() {
        let cache = MemoryCache::new();
        cache.set("a", json!(1), Duration::ZERO);
        cache.set("b", json!(2), Duration::from_secs(60));

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.remove("b"), Some(json!(2)));

        cache.set("c", json!(3), Duration::from_secs(60));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_set_sweeps_unread_expired_entries() {
        let cache = MemoryCache::with_purge_threshold(4);
        for key in ["a", "b", "c"] {
            cache.set(key, json!(key), Duration::ZERO);
        }
        assert_eq!(cache.entries.len(), 3);

        // Fourth insert reaches the threshold and sweeps the expired three
        cache.set("d", json!("d"), Duration::from_secs(60));
        assert_eq!(cache.entries.len(), 1);
        assert_eq!(cache.get("d"), Some(json!("d")));
    }

    #[test]
    fn test_sweep_threshold_grows_with_live_entries() {
        let cache = MemoryCache::with_purge_threshold(2);
        for i in 0..10 {
            cache.set(&i.to_string(), json!(i), Duration::from_secs(60));
        }
        assert_eq!(cache.len(), 10);
        assert!(cache.next_purge_at.load(Ordering::Relaxed) > 10);
    }
}
