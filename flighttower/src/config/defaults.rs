//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::settings::*;
use crate::provider::{DEFAULT_DETAILS_URL, DEFAULT_FEED_URL, DEFAULT_HTTP_TIMEOUT};

/// Default HTTP timeout in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = DEFAULT_HTTP_TIMEOUT.as_secs();

/// Default search radius in kilometers.
pub const DEFAULT_SEARCH_RADIUS_KM: u32 = 50;

/// Default number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = crate::flights::DEFAULT_LIMIT;

/// Default rescan center latitude.
pub const DEFAULT_RESCAN_LATITUDE: f64 = 0.0;

/// Default rescan center longitude.
pub const DEFAULT_RESCAN_LONGITUDE: f64 = 0.0;

/// Default rescan radius in kilometers (whole globe).
pub const DEFAULT_RESCAN_RADIUS_KM: f64 = 20_000.0;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "flighttower.log";

impl Default for ConfigFile {
    fn default() -> Self {
        let config_dir = super::file::config_directory();

        Self {
            upstream: UpstreamSettings {
                feed_url: DEFAULT_FEED_URL.to_string(),
                details_url: DEFAULT_DETAILS_URL.to_string(),
                timeout: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            },
            search: SearchSettings {
                radius_km: DEFAULT_SEARCH_RADIUS_KM,
                limit: DEFAULT_SEARCH_LIMIT,
            },
            rescan: RescanSettings {
                latitude: DEFAULT_RESCAN_LATITUDE,
                longitude: DEFAULT_RESCAN_LONGITUDE,
                radius_km: DEFAULT_RESCAN_RADIUS_KM,
            },
            logging: LoggingSettings {
                file: config_dir.join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
