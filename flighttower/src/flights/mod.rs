//! Flight lookup: proximity search and detail resolution.
//!
//! - [`ProximitySearch`] - nearest aircraft to a point, nearest first
//! - [`DetailResolver`] - flight identifier to [`FlightDetailResult`]
//! - [`FlightService`] - both, over one provider and one shared cache
//!
//! A search caches every identified aircraft it sees, so resolving an id
//! returned by a recent search never queries the feed again.

mod detail;
mod error;
pub mod nested;
mod request;
mod resolver;
mod search;
mod service;
mod summary;

pub use detail::{
    format_duration, route_label, FlightDetail, FlightDetailResponse, FlightDetailResult,
    FlightTimes, Route, NOT_FOUND_MESSAGE, UPSTREAM_ERROR_MESSAGE,
};
pub use error::{SearchError, SnapshotError};
pub use request::{SearchRequest, SearchResponse, DEFAULT_LIMIT, LIMIT_RANGE, RADIUS_KM_RANGE};
pub use resolver::{DetailResolver, RescanRegion, HINT_RADIUS_KM};
pub use search::ProximitySearch;
pub use service::FlightService;
pub use summary::FlightSummary;
