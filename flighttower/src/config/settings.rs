//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Live-flight feed endpoints
    pub upstream: UpstreamSettings,
    /// Search defaults
    pub search: SearchSettings,
    /// Detail-lookup rescan region
    pub rescan: RescanSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Upstream feed configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamSettings {
    /// Zone feed URL
    pub feed_url: String,
    /// Flight details URL
    pub details_url: String,
    /// Timeout in seconds for HTTP requests.
    pub timeout: u64,
}

/// Search defaults used when the caller does not specify them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub radius_km: u32,
    pub limit: usize,
}

/// Area scanned for a flight that is not cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RescanSettings {
    pub latitude: f64,
    pub longitude: f64,
    /// Scan radius in kilometers. Large enough values cover the whole globe.
    pub radius_km: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
