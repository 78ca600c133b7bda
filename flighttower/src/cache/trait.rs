//! Cache trait definition for dependency injection.

use std::time::Duration;

/// Expiring key-value cache keyed by flight identifier.
///
/// Both the proximity search and the detail resolver receive the cache as
/// an injected `Arc<dyn ExpiringCache<V>>`, so tests can hand each run a
/// fresh instance (or a [`NoOpCache`] to force the upstream rescan path).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use flighttower::cache::{ExpiringCache, MemoryCache};
///
/// let cache: MemoryCache<String> = MemoryCache::new();
/// cache.set("2f1e8a3b", "LOT3".to_string(), Duration::from_secs(600));
///
/// assert_eq!(cache.get("2f1e8a3b"), Some("LOT3".to_string()));
/// assert_eq!(cache.get("unknown"), None);
/// ```
pub trait ExpiringCache<V>: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// Returns `None` when no entry exists or when the entry's expiry instant
    /// has been reached. Expired entries are not removed by this call.
    fn get(&self, key: &str) -> Option<V>;

    /// Store `value` under `key`, expiring `ttl` from now.
    ///
    /// Unconditionally replaces any previous entry for the key.
    fn set(&self, key: &str, value: V, ttl: Duration);
}

/// No-op cache implementation that never caches.
///
/// Always returns cache misses. Useful for:
/// - Exercising the detail resolver's rescan path
/// - Debugging stale-data issues against the live feed
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use flighttower::cache::{ExpiringCache, NoOpCache};
///
/// let cache = NoOpCache;
/// cache.set("2f1e8a3b", 42u32, Duration::from_secs(600));
///
/// // Set succeeds but nothing is stored
/// let hit: Option<u32> = cache.get("2f1e8a3b");
/// assert_eq!(hit, None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCache;

impl<V> ExpiringCache<V> for NoOpCache {
    fn get(&self, _key: &str) -> Option<V> {
        None // Always miss
    }

    fn set(&self, _key: &str, _value: V, _ttl: Duration) {}
}
