//! Cache statistics tracking and reporting.

use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time cache statistics for logging and debugging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Reads that returned a live entry.
    pub hits: u64,
    /// Reads for keys that were never stored.
    pub misses: u64,
    /// Reads that found an entry past its expiry instant.
    pub expired: u64,
    /// Entries physically present, live or expired.
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of reads answered from the cache (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses + self.expired;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Lock-free counters updated on every read.
#[derive(Debug, Default)]
pub(super) struct StatCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    expired: AtomicU64,
}

impl StatCounters {
    pub(super) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_expired(&self) {
        self.expired.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn snapshot(&self, entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expired: self.expired.load(Ordering::Relaxed),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_empty() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_counts_expired_reads_as_misses() {
        let stats = CacheStats {
            hits: 2,
            misses: 1,
            expired: 1,
            entries: 3,
        };
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_counters_snapshot() {
        let counters = StatCounters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();
        counters.record_expired();

        let stats = counters.snapshot(4);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.entries, 4);
    }
}
