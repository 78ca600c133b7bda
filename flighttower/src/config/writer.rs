//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[upstream]
; FlightRadar24 zone feed (aircraft positions inside a bounding box)
feed_url = {}
; FlightRadar24 flight details endpoint
details_url = {}
; Timeout in seconds for HTTP requests (default: 10)
timeout = {}

[search]
; Default search radius in kilometers (5-100, default: 50)
radius_km = {}
; Default number of flights returned (1-50, default: 10)
limit = {}

[rescan]
; Area scanned when a detail lookup misses the cache.
; The default (0, 0, 20000 km) covers the whole globe.
latitude = {}
longitude = {}
radius_km = {}

[logging]
; Log file location (default: ~/.flighttower/flighttower.log)
file = {}
"#,
        config.upstream.feed_url,
        config.upstream.details_url,
        config.upstream.timeout,
        config.search.radius_km,
        config.search.limit,
        config.rescan.latitude,
        config.rescan.longitude,
        config.rescan.radius_km,
        path_to_string(&config.logging.file),
    )
}

/// Convert path to string, collapsing home dir to ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
