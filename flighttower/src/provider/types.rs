//! Provider types and traits

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::geo::{bounds_around, BoundingBox, GeoPoint};

/// Errors that can occur while talking to the live-flight provider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Point-in-time record of one aircraft as reported by the provider.
///
/// Every field is optional: the feed omits values freely and the core
/// tolerates any combination of gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftSnapshot {
    /// Provider-assigned flight identifier
    pub id: Option<String>,
    /// 24-bit ICAO transponder address, hex encoded
    pub icao_24bit: Option<String>,
    pub callsign: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Altitude in feet
    pub altitude: Option<i32>,
    /// Ground speed in knots
    pub ground_speed: Option<i32>,
    /// Track in degrees
    pub heading: Option<i32>,
    /// ICAO aircraft type designator
    pub aircraft_code: Option<String>,
    pub registration: Option<String>,
    pub origin_airport_name: Option<String>,
    pub origin_airport_iata: Option<String>,
    pub destination_airport_name: Option<String>,
    pub destination_airport_iata: Option<String>,
    pub on_ground: Option<bool>,
}

impl AircraftSnapshot {
    /// The flight identifier, if present and non-empty.
    pub fn flight_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Live-flight data source.
///
/// Implementors answer three questions: which box encloses a search radius,
/// which aircraft are inside a box, and what extended record exists for a
/// given aircraft. Calls block until the upstream round-trip completes.
pub trait FlightProvider: Send + Sync {
    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;

    /// Bounding box enclosing a circle of `radius_m` meters around `center`.
    fn bounds_by_point(&self, center: GeoPoint, radius_m: f64) -> BoundingBox {
        bounds_around(center, radius_m)
    }

    /// Aircraft currently inside `bounds`, in provider order.
    fn flights_in(&self, bounds: &BoundingBox) -> Result<Vec<AircraftSnapshot>, ProviderError>;

    /// Extended detail record for `flight`.
    ///
    /// A well-behaved provider returns a JSON object; anything else is a
    /// contract violation the caller must absorb.
    fn flight_details(&self, flight: &AircraftSnapshot) -> Result<Value, ProviderError>;
}
