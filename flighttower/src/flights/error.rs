//! Error types for flight lookup.

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors surfaced by a proximity search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// A request parameter is outside its accepted range
    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidRequest {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The upstream provider could not be queried
    #[error("Upstream provider unavailable: {0}")]
    UpstreamUnavailable(#[source] ProviderError),
}

impl From<ProviderError> for SearchError {
    fn from(err: ProviderError) -> Self {
        SearchError::UpstreamUnavailable(err)
    }
}

/// Why a snapshot could not become a summary.
///
/// Produced per snapshot during a search and handled by omitting that
/// snapshot; never returned to search callers.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SnapshotError {
    /// Latitude or longitude absent, or zero (the feed's no-fix sentinel)
    #[error("no position fix")]
    MissingPosition,

    #[error("invalid position ({lat}, {lon})")]
    InvalidPosition { lat: f64, lon: f64 },
}
