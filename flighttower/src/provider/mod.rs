//! Live-flight provider abstraction
//!
//! This module defines the upstream contract the flight lookup core depends
//! on ([`FlightProvider`]) and the FlightRadar24 implementation of it.
//!
//! ```ignore
//! use flighttower::provider::{Fr24Config, Fr24Provider, ReqwestClient};
//!
//! let http_client = ReqwestClient::new()?;
//! let provider = Fr24Provider::new(http_client, Fr24Config::default());
//! ```

mod fr24;
mod http;
mod types;

pub use fr24::{Fr24Config, Fr24Provider, DEFAULT_DETAILS_URL, DEFAULT_FEED_URL};
pub use http::{HttpClient, ReqwestClient, DEFAULT_HTTP_TIMEOUT};
pub use types::{AircraftSnapshot, FlightProvider, ProviderError};

#[cfg(test)]
pub use http::tests::MockHttpClient;
