//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading, logging initialization and service
//! creation to reduce duplication across command handlers.

use std::path::Path;

use flighttower::config::ConfigFile;
use flighttower::flights::FlightService;
use flighttower::logging::{init_logging, split_log_path, LoggingGuard};
use flighttower::provider::{Fr24Provider, ReqwestClient};
use tracing::info;

use crate::commands::common::load_config;
use crate::error::CliError;

/// Flight service wired to the live FlightRadar24 feed.
pub type LiveService = FlightService<Fr24Provider<ReqwestClient>>;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    _logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Config file to load instead of ~/.flighttower/config.ini
    /// * `debug_mode` - When true, enables debug-level logging unless RUST_LOG is set
    pub fn new(config_path: Option<&Path>, debug_mode: bool) -> Result<Self, CliError> {
        let config = load_config(config_path)?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(&log_dir, &log_file, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            _logging_guard: logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!(version = flighttower::VERSION, command, "flighttower starting");
    }

    /// Create a flight service from the loaded configuration.
    pub fn create_service(&self) -> Result<LiveService, CliError> {
        let http = ReqwestClient::with_timeout(self.config.http_timeout())
            .map_err(CliError::ServiceCreation)?;
        let provider = Fr24Provider::new(http, self.config.fr24_config());

        info!(
            feed_url = %self.config.upstream.feed_url,
            timeout_secs = self.config.upstream.timeout,
            "Service created"
        );

        Ok(FlightService::new(provider, self.config.rescan_region()))
    }
}
