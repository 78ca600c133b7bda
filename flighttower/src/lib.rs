//! flighttower - nearby live flights and their details
//!
//! This library finds the aircraft closest to a location using a public
//! live-flight feed, and resolves flight identifiers into normalized detail
//! records, with a short-lived cache between the two.
//!
//! # High-Level API
//!
//! For most use cases, the [`flights::FlightService`] facade is enough:
//!
//! ```ignore
//! use flighttower::config::ConfigFile;
//! use flighttower::flights::FlightService;
//! use flighttower::provider::{Fr24Provider, ReqwestClient};
//!
//! let config = ConfigFile::load()?;
//! let http = ReqwestClient::with_timeout(config.http_timeout())?;
//! let service = FlightService::new(
//!     Fr24Provider::new(http, config.fr24_config()),
//!     config.rescan_region(),
//! );
//!
//! let nearby = service.search(&config.search_request(52.23, 21.01, None, None))?;
//! if let Some(id) = nearby.flights.first().and_then(|f| f.id.as_deref()) {
//!     let detail = service.detail(id).to_response();
//! }
//! ```

pub mod cache;
pub mod config;
pub mod flights;
pub mod geo;
pub mod logging;
pub mod provider;

/// Version of the flighttower library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
