//! Configuration file handling for ~/.flighttower/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use ini::Ini;
use thiserror::Error;

use super::settings::ConfigFile;
use crate::flights::{RescanRegion, SearchRequest};
use crate::geo::GeoPoint;
use crate::provider::Fr24Config;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.flighttower/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.flighttower/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        Self::ensure_exists_at(&path)?;
        Ok(path)
    }

    /// Create a default config file at `path` if none exists.
    ///
    /// Returns `true` when a new file was written.
    pub fn ensure_exists_at(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Endpoints for the FlightRadar24 provider.
    pub fn fr24_config(&self) -> Fr24Config {
        Fr24Config {
            feed_url: self.upstream.feed_url.clone(),
            details_url: self.upstream.details_url.clone(),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout)
    }

    pub fn rescan_region(&self) -> RescanRegion {
        RescanRegion {
            center: GeoPoint::new(self.rescan.latitude, self.rescan.longitude),
            radius_km: self.rescan.radius_km,
        }
    }

    /// A search request at `lat`/`lon`, with radius and limit taken from
    /// the overrides or else the `[search]` defaults.
    pub fn search_request(
        &self,
        lat: f64,
        lon: f64,
        radius_km: Option<u32>,
        limit: Option<usize>,
    ) -> SearchRequest {
        SearchRequest::new(lat, lon, radius_km.unwrap_or(self.search.radius_km))
            .with_limit(limit.unwrap_or(self.search.limit))
    }
}

/// Get the path to the config directory (~/.flighttower).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".flighttower")
}

/// Get the path to the config file (~/.flighttower/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
