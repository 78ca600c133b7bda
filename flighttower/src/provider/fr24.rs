//! FlightRadar24 public feed client.
//!
//! Reads aircraft positions from the zone feed (`feed.js`) and extended
//! flight records from the click handler endpoint. Both are unauthenticated
//! JSON endpoints fetched over the injected [`HttpClient`].
//!
//! # Feed Format
//!
//! The zone feed is a JSON object. Bookkeeping keys (`full_count`,
//! `version`, `stats`) hold scalars or objects; every flight is an
//! array-valued entry keyed by its identifier:
//!
//! ```text
//! "2f1e8a3b": ["48AE21", 52.17, 20.97, 271, 3425, 188, "7654", "T-EPWA1",
//!              "B738", "SP-LWA", 1718040000, "WAW", "LHR", "LO281", 0,
//!              1344, "LOT281", 0, "LOT"]
//! ```

use serde_json::Value;

use super::http::HttpClient;
use super::types::{AircraftSnapshot, FlightProvider, ProviderError};
use crate::geo::BoundingBox;

/// Default zone feed URL.
pub const DEFAULT_FEED_URL: &str = "https://data-cloud.flightradar24.com/zones/fcgi/feed.js";

/// Default flight details URL.
pub const DEFAULT_DETAILS_URL: &str = "https://data-live.flightradar24.com/clickhandler/";

/// Details endpoint schema version.
const DETAILS_VERSION: &str = "1.5";

/// Fixed feed filters: airborne traffic from every source, no ground vehicles.
const FEED_FILTERS: &[(&str, &str)] = &[
    ("faa", "1"),
    ("satellite", "1"),
    ("mlat", "1"),
    ("flarm", "1"),
    ("adsb", "1"),
    ("gnd", "0"),
    ("air", "1"),
    ("vehicles", "0"),
    ("estimated", "1"),
    ("maxage", "14400"),
    ("gliders", "0"),
    ("stats", "0"),
    ("limit", "5000"),
];

// Column positions within a feed row
const COL_ICAO_24BIT: usize = 0;
const COL_LATITUDE: usize = 1;
const COL_LONGITUDE: usize = 2;
const COL_HEADING: usize = 3;
const COL_ALTITUDE: usize = 4;
const COL_GROUND_SPEED: usize = 5;
const COL_AIRCRAFT_CODE: usize = 8;
const COL_REGISTRATION: usize = 9;
const COL_ORIGIN_IATA: usize = 11;
const COL_DESTINATION_IATA: usize = 12;
const COL_ON_GROUND: usize = 14;
const COL_CALLSIGN: usize = 16;

/// Endpoint configuration for [`Fr24Provider`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fr24Config {
    /// Zone feed URL
    pub feed_url: String,
    /// Click handler (flight details) URL
    pub details_url: String,
}

impl Default for Fr24Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            details_url: DEFAULT_DETAILS_URL.to_string(),
        }
    }
}

/// FlightRadar24 live-flight provider.
pub struct Fr24Provider<C: HttpClient> {
    http: C,
    config: Fr24Config,
}

impl<C: HttpClient> Fr24Provider<C> {
    pub fn new(http: C, config: Fr24Config) -> Self {
        Self { http, config }
    }

    fn feed_url(&self, bounds: &BoundingBox) -> Result<reqwest::Url, ProviderError> {
        let bounds = bounds.to_string();
        let params =
            std::iter::once(("bounds", bounds.as_str())).chain(FEED_FILTERS.iter().copied());

        reqwest::Url::parse_with_params(&self.config.feed_url, params)
            .map_err(|e| ProviderError::InvalidResponse(format!("Invalid feed URL: {}", e)))
    }

    fn details_url(&self, flight_id: &str) -> Result<reqwest::Url, ProviderError> {
        reqwest::Url::parse_with_params(
            &self.config.details_url,
            [("flight", flight_id), ("version", DETAILS_VERSION)],
        )
        .map_err(|e| ProviderError::InvalidResponse(format!("Invalid details URL: {}", e)))
    }
}

impl<C: HttpClient> FlightProvider for Fr24Provider<C> {
    fn name(&self) -> &str {
        "flightradar24"
    }

    fn flights_in(&self, bounds: &BoundingBox) -> Result<Vec<AircraftSnapshot>, ProviderError> {
        let url = self.feed_url(bounds)?;
        let body = self.http.get(url.as_str())?;
        let flights = parse_feed(&body)?;

        tracing::debug!(bounds = %bounds, count = flights.len(), "Zone feed fetched");

        Ok(flights)
    }

    fn flight_details(&self, flight: &AircraftSnapshot) -> Result<Value, ProviderError> {
        let flight_id = flight.flight_id().ok_or_else(|| {
            ProviderError::InvalidResponse("aircraft snapshot has no flight id".to_string())
        })?;

        let url = self.details_url(flight_id)?;
        let body = self.http.get(url.as_str())?;

        // A non-JSON body is passed through as text for the caller to reject
        Ok(serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned())))
    }
}

/// Parse a zone feed body into snapshots, preserving feed order.
///
/// A `null` body means no traffic.
fn parse_feed(body: &[u8]) -> Result<Vec<AircraftSnapshot>, ProviderError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Zone feed is not JSON: {}", e)))?;

    let entries = match value {
        Value::Object(entries) => entries,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ProviderError::InvalidResponse(format!(
                "Zone feed has unexpected shape: {}",
                json_kind(&other)
            )))
        }
    };

    Ok(entries
        .iter()
        .filter_map(|(id, row)| row.as_array().map(|row| snapshot_from_row(id, row)))
        .collect())
}

fn snapshot_from_row(id: &str, row: &[Value]) -> AircraftSnapshot {
    AircraftSnapshot {
        id: Some(id.to_string()).filter(|id| !id.is_empty()),
        icao_24bit: text(row, COL_ICAO_24BIT),
        callsign: text(row, COL_CALLSIGN),
        latitude: float(row, COL_LATITUDE),
        longitude: float(row, COL_LONGITUDE),
        altitude: int(row, COL_ALTITUDE),
        ground_speed: int(row, COL_GROUND_SPEED),
        heading: int(row, COL_HEADING),
        aircraft_code: text(row, COL_AIRCRAFT_CODE),
        registration: text(row, COL_REGISTRATION),
        origin_airport_name: None,
        origin_airport_iata: text(row, COL_ORIGIN_IATA),
        destination_airport_name: None,
        destination_airport_iata: text(row, COL_DESTINATION_IATA),
        on_ground: int(row, COL_ON_GROUND).map(|flag| flag != 0),
    }
}

fn text(row: &[Value], col: usize) -> Option<String> {
    row.get(col)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn float(row: &[Value], col: usize) -> Option<f64> {
    row.get(col).and_then(Value::as_f64)
}

fn int(row: &[Value], col: usize) -> Option<i32> {
    let value = row.get(col)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))
        .and_then(|n| i32::try_from(n).ok())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
