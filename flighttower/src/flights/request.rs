//! Search request and response envelopes.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::SearchError;
use super::summary::FlightSummary;
use crate::geo::GeoPoint;

/// Accepted search radius in kilometers.
pub const RADIUS_KM_RANGE: RangeInclusive<u32> = 5..=100;

/// Accepted result limit.
pub const LIMIT_RANGE: RangeInclusive<usize> = 1..=50;

/// Default number of results.
pub const DEFAULT_LIMIT: usize = 10;

/// A proximity search as submitted by a client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub lat: f64,
    pub lon: f64,
    pub radius_km: u32,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new(lat: f64, lon: f64, radius_km: u32) -> Self {
        Self {
            lat,
            lon,
            radius_km,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(invalid("lat", self.lat, "must be between -90 and 90"));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(invalid("lon", self.lon, "must be between -180 and 180"));
        }
        if !RADIUS_KM_RANGE.contains(&self.radius_km) {
            return Err(invalid(
                "radius_km",
                self.radius_km,
                &format!(
                    "must be between {} and {}",
                    RADIUS_KM_RANGE.start(),
                    RADIUS_KM_RANGE.end()
                ),
            ));
        }
        if !LIMIT_RANGE.contains(&self.limit) {
            return Err(invalid(
                "limit",
                self.limit,
                &format!(
                    "must be between {} and {}",
                    LIMIT_RANGE.start(),
                    LIMIT_RANGE.end()
                ),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: impl ToString, reason: &str) -> SearchError {
    SearchError::InvalidRequest {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Search result envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub count: usize,
    pub flights: Vec<FlightSummary>,
}

impl From<Vec<FlightSummary>> for SearchResponse {
    fn from(flights: Vec<FlightSummary>) -> Self {
        Self {
            count: flights.len(),
            flights,
        }
    }
}
