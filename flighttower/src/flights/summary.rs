//! Distance-annotated flight summaries.

use serde::{Deserialize, Serialize};

use super::error::SnapshotError;
use crate::geo::{distance_km, GeoPoint};
use crate::provider::AircraftSnapshot;

/// One aircraft in a search result.
///
/// Always carries a position: snapshots without a fix never become summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub id: Option<String>,
    pub callsign: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// Distance from the search center
    pub distance_km: f64,
    pub altitude_ft: Option<i32>,
    pub speed_kts: Option<i32>,
    pub heading_deg: Option<i32>,
    pub origin_airport_name: Option<String>,
    pub origin_airport_iata: Option<String>,
    pub destination_airport_name: Option<String>,
    pub destination_airport_iata: Option<String>,
}

impl FlightSummary {
    /// Build a summary for `snapshot` measured from `center`.
    pub fn try_from_snapshot(
        snapshot: &AircraftSnapshot,
        center: GeoPoint,
    ) -> Result<Self, SnapshotError> {
        let position = position_fix(snapshot)?;

        Ok(Self {
            id: snapshot.id.clone(),
            callsign: snapshot.callsign.clone(),
            lat: position.lat,
            lon: position.lon,
            distance_km: distance_km(center, position),
            altitude_ft: snapshot.altitude,
            speed_kts: snapshot.ground_speed,
            heading_deg: snapshot.heading,
            origin_airport_name: snapshot.origin_airport_name.clone(),
            origin_airport_iata: snapshot.origin_airport_iata.clone(),
            destination_airport_name: snapshot.destination_airport_name.clone(),
            destination_airport_iata: snapshot.destination_airport_iata.clone(),
        })
    }
}

fn position_fix(snapshot: &AircraftSnapshot) -> Result<GeoPoint, SnapshotError> {
    let (lat, lon) = match (snapshot.latitude, snapshot.longitude) {
        (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => (lat, lon),
        _ => return Err(SnapshotError::MissingPosition),
    };

    let position = GeoPoint::new(lat, lon);
    if !position.is_valid() {
        return Err(SnapshotError::InvalidPosition { lat, lon });
    }
    Ok(position)
}
