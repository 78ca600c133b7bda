//! Short-lived flight cache.
//!
//! Maps opaque flight identifiers to values that expire after a fixed
//! time-to-live. Expiry is evaluated lazily on read; nothing runs in the
//! background.

mod memory;
mod stats;
mod r#trait;

use std::time::Duration;

pub use memory::MemoryCache;
pub use r#trait::{ExpiringCache, NoOpCache};
pub use stats::CacheStats;

/// Time-to-live for snapshots stored by a proximity search.
pub const SEARCH_TTL: Duration = Duration::from_secs(600);

/// Time-to-live for snapshots found by the detail resolver's rescan.
pub const RESCAN_TTL: Duration = Duration::from_secs(300);
