//! Flight detail resolution.
//!
//! Resolution state machine:
//!
//! ```text
//! cache lookup ──hit──────────────────────────┐
//!      │ miss                                 ▼
//!      ▼                               detail fetch ──err──> UpstreamError
//! rescan (hint, then region) ──found──>       │ ok
//!      │ not found                            ▼
//!      ▼                               object? ──no──> Malformed
//! NotFound                                    │ yes
//!                                             ▼
//!                                           Found
//! ```

use std::sync::Arc;

use super::detail::{FlightDetail, FlightDetailResult};
use crate::cache::{ExpiringCache, RESCAN_TTL};
use crate::geo::GeoPoint;
use crate::provider::{AircraftSnapshot, FlightProvider};

/// Radius scanned around a caller-supplied location hint.
pub const HINT_RADIUS_KM: f64 = 100.0;

/// Area scanned for a flight that is not cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescanRegion {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl Default for RescanRegion {
    /// The whole globe, centered on 0°N 0°E.
    fn default() -> Self {
        Self {
            center: GeoPoint::new(0.0, 0.0),
            radius_km: 20_000.0,
        }
    }
}

/// Resolves flight identifiers into normalized details.
///
/// Never fails: every outcome, including upstream errors, is a
/// [`FlightDetailResult`] variant.
pub struct DetailResolver<P: FlightProvider> {
    provider: Arc<P>,
    cache: Arc<dyn ExpiringCache<AircraftSnapshot>>,
    region: RescanRegion,
}

impl<P: FlightProvider> DetailResolver<P> {
    pub fn new(
        provider: Arc<P>,
        cache: Arc<dyn ExpiringCache<AircraftSnapshot>>,
        region: RescanRegion,
    ) -> Self {
        Self {
            provider,
            cache,
            region,
        }
    }

    pub fn region(&self) -> RescanRegion {
        self.region
    }

    /// Resolve `flight_id`, rescanning the configured region on a cache miss.
    pub fn resolve(&self, flight_id: &str) -> FlightDetailResult {
        self.resolve_with_hint(flight_id, None)
    }

    /// Resolve `flight_id`, rescanning around `hint` before the configured
    /// region on a cache miss.
    pub fn resolve_near(&self, flight_id: &str, hint: GeoPoint) -> FlightDetailResult {
        self.resolve_with_hint(flight_id, Some(hint))
    }

    fn resolve_with_hint(&self, flight_id: &str, hint: Option<GeoPoint>) -> FlightDetailResult {
        tracing::info!(flight_id, "Resolving flight details");

        let Some(snapshot) = self.locate(flight_id, hint) else {
            tracing::info!(flight_id, "Flight not found");
            return FlightDetailResult::not_found();
        };

        let record = match self.provider.flight_details(&snapshot) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(flight_id, error = %e, "Flight detail fetch failed");
                return FlightDetailResult::upstream_error();
            }
        };

        if !record.is_object() {
            tracing::debug!(flight_id, "Flight detail record is not an object");
            return FlightDetailResult::Malformed;
        }

        FlightDetailResult::Found(FlightDetail::from_record(&record))
    }

    /// Cached snapshot for `flight_id`, or one found by rescanning.
    fn locate(&self, flight_id: &str, hint: Option<GeoPoint>) -> Option<AircraftSnapshot> {
        if let Some(snapshot) = self.cache.get(flight_id) {
            tracing::debug!(flight_id, "Cache hit");
            return Some(snapshot);
        }
        tracing::debug!(flight_id, "Cache miss, rescanning");

        let hint_region = hint.map(|center| RescanRegion {
            center,
            radius_km: HINT_RADIUS_KM,
        });

        let snapshot = hint_region
            .into_iter()
            .chain(std::iter::once(self.region))
            .find_map(|region| self.rescan(flight_id, region))?;

        self.cache.set(flight_id, snapshot.clone(), RESCAN_TTL);
        Some(snapshot)
    }

    fn rescan(&self, flight_id: &str, region: RescanRegion) -> Option<AircraftSnapshot> {
        let bounds = self
            .provider
            .bounds_by_point(region.center, region.radius_km * 1000.0);

        let snapshots = match self.provider.flights_in(&bounds) {
            Ok(snapshots) => snapshots,
            Err(e) => {
                tracing::warn!(flight_id, bounds = %bounds, error = %e, "Rescan failed");
                return None;
            }
        };

        let found = snapshots
            .into_iter()
            .find(|snapshot| snapshot.flight_id() == Some(flight_id));

        tracing::debug!(flight_id, bounds = %bounds, found = found.is_some(), "Rescan complete");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryCache, NoOpCache, SEARCH_TTL};
    use crate::geo::BoundingBox;
    use crate::provider::ProviderError;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::time::Duration;

    /// Provider serving a fixed set of aircraft, filtered by the requested box.
    struct ScriptedProvider {
        aircraft: Vec<AircraftSnapshot>,
        details: Result<Value, ProviderError>,
        scans: Mutex<Vec<BoundingBox>>,
        fail_scans: bool,
    }

    impl ScriptedProvider {
        fn new(aircraft: Vec<AircraftSnapshot>, details: Result<Value, ProviderError>) -> Self {
            Self {
                aircraft,
                details,
                scans: Mutex::new(Vec::new()),
                fail_scans: false,
            }
        }

        fn scan_count(&self) -> usize {
            self.scans.lock().len()
        }
    }

    impl FlightProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        fn flights_in(&self, bounds: &BoundingBox) -> Result<Vec<AircraftSnapshot>, ProviderError> {
            self.scans.lock().push(*bounds);
            if self.fail_scans {
                return Err(ProviderError::Http("unreachable".to_string()));
            }
            Ok(self
                .aircraft
                .iter()
                .filter(|a| match (a.latitude, a.longitude) {
                    (Some(lat), Some(lon)) => bounds.contains(GeoPoint::new(lat, lon)),
                    _ => false,
                })
                .cloned()
                .collect())
        }

        fn flight_details(&self, _flight: &AircraftSnapshot) -> Result<Value, ProviderError> {
            self.details.clone()
        }
    }

    fn aircraft(id: &str, lat: f64, lon: f64) -> AircraftSnapshot {
        AircraftSnapshot {
            id: Some(id.to_string()),
            latitude: Some(lat),
            longitude: Some(lon),
            ..Default::default()
        }
    }

    fn details() -> Value {
        json!({"airline": {"name": "LOT Polish Airlines"}})
    }

    /// Cache that records the TTL of every write.
    #[derive(Default)]
    struct RecordingCache {
        writes: Mutex<Vec<(String, Duration)>>,
    }

    impl ExpiringCache<AircraftSnapshot> for RecordingCache {
        fn get(&self, _key: &str) -> Option<AircraftSnapshot> {
            None
        }

        fn set(&self, key: &str, _value: AircraftSnapshot, ttl: Duration) {
            self.writes.lock().push((key.to_string(), ttl));
        }
    }

    fn resolver(
        provider: ScriptedProvider,
    ) -> (
        DetailResolver<ScriptedProvider>,
        Arc<ScriptedProvider>,
        Arc<MemoryCache<AircraftSnapshot>>,
    ) {
        let provider = Arc::new(provider);
        let cache: Arc<MemoryCache<AircraftSnapshot>> = Arc::new(MemoryCache::new());
        let resolver =
            DetailResolver::new(provider.clone(), cache.clone(), RescanRegion::default());
        (resolver, provider, cache)
    }

    #[test]
    fn test_cache_hit_skips_rescan() {
        let (resolver, provider, cache) =
            resolver(ScriptedProvider::new(Vec::new(), Ok(details())));
        cache.set("2f1e8a3b", aircraft("2f1e8a3b", 52.2, 21.0), SEARCH_TTL);

        let result = resolver.resolve("2f1e8a3b");

        assert!(result.is_found());
        assert_eq!(provider.scan_count(), 0);
    }

    #[test]
    fn test_cache_miss_rescans_and_caches() {
        let (resolver, provider, cache) = resolver(ScriptedProvider::new(
            vec![aircraft("2f1e8a3b", 52.2, 21.0)],
            Ok(details()),
        ));

        assert!(resolver.resolve("2f1e8a3b").is_found());
        assert_eq!(provider.scan_count(), 1);
        assert!(cache.get("2f1e8a3b").is_some());

        assert!(resolver.resolve("2f1e8a3b").is_found());
        assert_eq!(provider.scan_count(), 1);
    }

    #[test]
    fn test_rescan_result_uses_rescan_ttl() {
        let provider = Arc::new(ScriptedProvider::new(
            vec![aircraft("2f1e8a3b", 52.2, 21.0)],
            Ok(details()),
        ));
        let cache = Arc::new(RecordingCache::default());
        let resolver = DetailResolver::new(provider, cache.clone(), RescanRegion::default());

        assert!(resolver.resolve("2f1e8a3b").is_found());

        let writes = cache.writes.lock();
        assert_eq!(writes.as_slice(), &[("2f1e8a3b".to_string(), RESCAN_TTL)]);
        assert_ne!(RESCAN_TTL, SEARCH_TTL);
    }

    #[test]
    fn test_extreme_epochs_resolve_without_panic() {
        let record = json!({
            "time": {"scheduled": {"departure": i64::MIN, "arrival": i64::MAX}}
        });
        let (resolver, _, _) = resolver(ScriptedProvider::new(
            vec![aircraft("2f1e8a3b", 52.2, 21.0)],
            Ok(record),
        ));

        let FlightDetailResult::Found(detail) = resolver.resolve("2f1e8a3b") else {
            panic!("expected a found result");
        };
        assert_eq!(detail.times.scheduled_arrival, Some(i64::MAX));
        assert_eq!(detail.times.duration_readable.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_unknown_flight_is_not_found() {
        let (resolver, _, cache) = resolver(ScriptedProvider::new(
            vec![aircraft("other", 52.2, 21.0)],
            Ok(details()),
        ));

        assert_eq!(resolver.resolve("missing"), FlightDetailResult::not_found());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_rescan_failure_is_not_found() {
        let mut provider = ScriptedProvider::new(Vec::new(), Ok(details()));
        provider.fail_scans = true;
        let (resolver, _, _) = resolver(provider);

        assert_eq!(resolver.resolve("2f1e8a3b"), FlightDetailResult::not_found());
    }

    #[test]
    fn test_detail_error_is_upstream_error() {
        let (resolver, _, _) = resolver(ScriptedProvider::new(
            vec![aircraft("2f1e8a3b", 52.2, 21.0)],
            Err(ProviderError::Http("HTTP 502".to_string())),
        ));

        assert_eq!(resolver.resolve("2f1e8a3b"), FlightDetailResult::upstream_error());
    }

    #[test]
    fn test_non_object_detail_is_malformed() {
        for body in [json!("Bad Gateway"), json!(null), json!([1, 2])] {
            let (resolver, _, _) = resolver(ScriptedProvider::new(
                vec![aircraft("2f1e8a3b", 52.2, 21.0)],
                Ok(body),
            ));
            assert_eq!(resolver.resolve("2f1e8a3b"), FlightDetailResult::Malformed);
        }
    }

    #[test]
    fn test_hint_scanned_before_region() {
        let provider = Arc::new(ScriptedProvider::new(
            vec![aircraft("2f1e8a3b", 52.2, 21.0)],
            Ok(details()),
        ));
        // A region that cannot see Warsaw
        let region = RescanRegion {
            center: GeoPoint::new(-33.9, 151.2),
            radius_km: 100.0,
        };
        let resolver = DetailResolver::new(provider.clone(), Arc::new(NoOpCache), region);

        assert!(resolver.resolve_near("2f1e8a3b", GeoPoint::new(52.23, 21.01)).is_found());
        assert_eq!(provider.scan_count(), 1);

        assert_eq!(resolver.resolve("2f1e8a3b"), FlightDetailResult::not_found());
    }

    #[test]
    fn test_hint_miss_falls_back_to_region() {
        let provider = Arc::new(ScriptedProvider::new(
            vec![aircraft("2f1e8a3b", 52.2, 21.0)],
            Ok(details()),
        ));
        let resolver =
            DetailResolver::new(provider.clone(), Arc::new(NoOpCache), RescanRegion::default());

        assert!(resolver.resolve_near("2f1e8a3b", GeoPoint::new(-33.9, 151.2)).is_found());
        assert_eq!(provider.scan_count(), 2);
    }
}
