//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use std::path::PathBuf;
use std::str::FromStr;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::flights::{LIMIT_RANGE, RADIUS_KM_RANGE};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [upstream] section
    if let Some(section) = ini.section(Some("upstream")) {
        if let Some(v) = section.get("feed_url") {
            config.upstream.feed_url = non_empty("upstream", "feed_url", v)?;
        }
        if let Some(v) = section.get("details_url") {
            config.upstream.details_url = non_empty("upstream", "details_url", v)?;
        }
        if let Some(v) = section.get("timeout") {
            let timeout: u64 =
                parse_value("upstream", "timeout", v, "must be a positive integer (seconds)")?;
            if timeout == 0 {
                return Err(invalid(
                    "upstream",
                    "timeout",
                    v,
                    "must be a positive integer (seconds)",
                ));
            }
            config.upstream.timeout = timeout;
        }
    }

    // [search] section
    if let Some(section) = ini.section(Some("search")) {
        if let Some(v) = section.get("radius_km") {
            let reason = format!(
                "must be an integer between {} and {}",
                RADIUS_KM_RANGE.start(),
                RADIUS_KM_RANGE.end()
            );
            let radius: u32 = parse_value("search", "radius_km", v, &reason)?;
            if !RADIUS_KM_RANGE.contains(&radius) {
                return Err(invalid("search", "radius_km", v, &reason));
            }
            config.search.radius_km = radius;
        }
        if let Some(v) = section.get("limit") {
            let reason = format!(
                "must be an integer between {} and {}",
                LIMIT_RANGE.start(),
                LIMIT_RANGE.end()
            );
            let limit: usize = parse_value("search", "limit", v, &reason)?;
            if !LIMIT_RANGE.contains(&limit) {
                return Err(invalid("search", "limit", v, &reason));
            }
            config.search.limit = limit;
        }
    }

    // [rescan] section
    if let Some(section) = ini.section(Some("rescan")) {
        if let Some(v) = section.get("latitude") {
            config.rescan.latitude = parse_in_range("rescan", "latitude", v, -90.0, 90.0)?;
        }
        if let Some(v) = section.get("longitude") {
            config.rescan.longitude = parse_in_range("rescan", "longitude", v, -180.0, 180.0)?;
        }
        if let Some(v) = section.get("radius_km") {
            let reason = "must be a positive number (kilometers)";
            let radius: f64 = parse_value("rescan", "radius_km", v, reason)?;
            if !radius.is_finite() || radius <= 0.0 {
                return Err(invalid("rescan", "radius_km", v, reason));
            }
            config.rescan.radius_km = radius;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_value<T: FromStr>(
    section: &str,
    key: &str,
    value: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, reason))
}

fn parse_in_range(
    section: &str,
    key: &str,
    value: &str,
    min: f64,
    max: f64,
) -> Result<f64, ConfigFileError> {
    let reason = format!("must be a number between {} and {}", min, max);
    let parsed: f64 = parse_value(section, key, value, &reason)?;
    if !parsed.is_finite() || parsed < min || parsed > max {
        return Err(invalid(section, key, value, &reason));
    }
    Ok(parsed)
}

fn non_empty(section: &str, key: &str, value: &str) -> Result<String, ConfigFileError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(section, key, value, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
