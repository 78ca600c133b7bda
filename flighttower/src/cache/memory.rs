//! In-memory cache with lazy time-to-live expiry.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use super::stats::{CacheStats, StatCounters};
use super::ExpiringCache;

/// Upper bound on a stored time-to-live, keeps `Instant` arithmetic in range.
const MAX_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Entry in the memory cache.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    /// Cached value
    value: V,
    /// Instant from which the entry reads as absent
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl.min(MAX_TTL),
        }
    }

    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Process-local expiring cache.
///
/// There is no eviction thread: expiry is checked when an entry is read,
/// and expired entries stay in storage until overwritten or until
/// [`purge_expired`](MemoryCache::purge_expired) compacts them.
/// Reads take a shared lock so overlapping lookups do not serialize.
pub struct MemoryCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    counters: StatCounters,
}

impl<V> MemoryCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            counters: StatCounters::default(),
        }
    }

    /// Number of physically stored entries, including expired ones.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every entry whose expiry instant has passed.
    ///
    /// Returns the number of entries removed. Never changes what `get`
    /// reports for any key.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        let removed = before - entries.len();

        if removed > 0 {
            tracing::debug!(removed, remaining = entries.len(), "Purged expired cache entries");
        }

        removed
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.len())
    }
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync> ExpiringCache<V> for MemoryCache<V> {
    fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read();

        match entries.get(key) {
            Some(entry) if entry.is_live(Instant::now()) => {
                self.counters.record_hit();
                Some(entry.value.clone())
            }
            Some(_) => {
                self.counters.record_expired();
                None
            }
            None => {
                self.counters.record_miss();
                None
            }
        }
    }

    fn set(&self, key: &str, value: V, ttl: Duration) {
        self.entries
            .write()
            .insert(key.to_string(), CacheEntry::new(value, ttl));
    }
}
