//! Proximity search over the live feed.

use std::sync::Arc;

use super::error::SearchError;
use super::summary::FlightSummary;
use crate::cache::{ExpiringCache, SEARCH_TTL};
use crate::geo::GeoPoint;
use crate::provider::{AircraftSnapshot, FlightProvider};

/// Finds the aircraft nearest to a point.
///
/// Every identified aircraft seen by a search is cached for [`SEARCH_TTL`]
/// so a detail lookup that follows can skip the upstream rescan.
pub struct ProximitySearch<P: FlightProvider> {
    provider: Arc<P>,
    cache: Arc<dyn ExpiringCache<AircraftSnapshot>>,
}

impl<P: FlightProvider> ProximitySearch<P> {
    pub fn new(provider: Arc<P>, cache: Arc<dyn ExpiringCache<AircraftSnapshot>>) -> Self {
        Self { provider, cache }
    }

    /// Aircraft within `radius_km` of `center`, nearest first, at most `limit`.
    ///
    /// Fails only if the provider cannot be queried. Aircraft without a
    /// usable position are dropped from the result.
    pub fn search(
        &self,
        center: GeoPoint,
        radius_km: f64,
        limit: usize,
    ) -> Result<Vec<FlightSummary>, SearchError> {
        let bounds = self.provider.bounds_by_point(center, radius_km * 1000.0);
        let snapshots = self.provider.flights_in(&bounds).map_err(|e| {
            tracing::warn!(provider = self.provider.name(), error = %e, "Flight search failed");
            SearchError::UpstreamUnavailable(e)
        })?;

        tracing::info!(
            lat = center.lat,
            lon = center.lon,
            radius_km,
            bounds = %bounds,
            received = snapshots.len(),
            "Flights received"
        );

        let mut cached = 0usize;
        for snapshot in &snapshots {
            if let Some(id) = snapshot.flight_id() {
                self.cache.set(id, snapshot.clone(), SEARCH_TTL);
                cached += 1;
            }
        }
        tracing::debug!(cached, "Cached flight snapshots");

        let mut summaries: Vec<FlightSummary> = snapshots
            .iter()
            .filter_map(|snapshot| match FlightSummary::try_from_snapshot(snapshot, center) {
                Ok(summary) => Some(summary),
                Err(reason) => {
                    tracing::debug!(
                        flight_id = snapshot.flight_id().unwrap_or("N/A"),
                        %reason,
                        "Skipping flight"
                    );
                    None
                }
            })
            .collect();

        // Stable: equal distances keep provider order
        summaries.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        summaries.truncate(limit);

        tracing::info!(returned = summaries.len(), "Flight search complete");

        Ok(summaries)
    }
}
