//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use flighttower::config::ConfigFileError;
use flighttower::flights::SearchError;
use flighttower::provider::ProviderError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Failed to build the upstream client
    ServiceCreation(ProviderError),
    /// Search rejected or failed
    Search(SearchError),
    /// Failed to serialize output
    Output(serde_json::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Search(SearchError::UpstreamUnavailable(_)) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. No network connection");
                eprintln!("  2. The feed is rate limiting this address: wait and retry");
                eprintln!("  3. A custom [upstream] feed_url in config.ini is wrong");
            }
            CliError::Config(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!("Fix the value in config.ini, or regenerate defaults with:");
                eprintln!("  flighttower config init --force");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::ServiceCreation(e) => write!(f, "Failed to create service: {}", e),
            CliError::Search(e) => write!(f, "Search failed: {}", e),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::ServiceCreation(e) => Some(e),
            CliError::Search(e) => Some(e),
            CliError::Output(e) => Some(e),
            CliError::LoggingInit(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<SearchError> for CliError {
    fn from(e: SearchError) -> Self {
        CliError::Search(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_search_error_display_and_source() {
        let err: CliError =
            SearchError::UpstreamUnavailable(ProviderError::Http("timeout".to_string())).into();

        assert!(err.to_string().starts_with("Search failed:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_logging_error_has_no_source() {
        let err = CliError::LoggingInit("permission denied".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to initialize logging: permission denied"
        );
        assert!(err.source().is_none());
    }
}
