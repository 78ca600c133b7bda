//! Flight lookup facade.

use std::sync::Arc;

use super::detail::FlightDetailResult;
use super::error::SearchError;
use super::request::{SearchRequest, SearchResponse};
use super::resolver::{DetailResolver, RescanRegion};
use super::search::ProximitySearch;
use crate::cache::{CacheStats, ExpiringCache, MemoryCache};
use crate::geo::GeoPoint;
use crate::provider::{AircraftSnapshot, FlightProvider};

/// Search and detail lookup over one provider and one shared cache.
///
/// `Send + Sync`: a single instance serves concurrent callers. Each search
/// first purges expired snapshots, so a long-lived instance does not
/// accumulate stale entries.
///
/// # Example
///
/// ```ignore
/// use flighttower::flights::{FlightService, RescanRegion, SearchRequest};
/// use flighttower::provider::{Fr24Config, Fr24Provider, ReqwestClient};
///
/// let provider = Fr24Provider::new(ReqwestClient::new()?, Fr24Config::default());
/// let service = FlightService::new(provider, RescanRegion::default());
///
/// let response = service.search(&SearchRequest::new(52.23, 21.01, 50))?;
/// for flight in &response.flights {
///     let detail = service.detail(flight.id.as_deref().unwrap_or_default());
/// }
/// ```
pub struct FlightService<P: FlightProvider> {
    search: ProximitySearch<P>,
    resolver: DetailResolver<P>,
    cache: Arc<MemoryCache<AircraftSnapshot>>,
}

impl<P: FlightProvider> FlightService<P> {
    /// Create a service with a fresh in-memory cache.
    pub fn new(provider: P, region: RescanRegion) -> Self {
        Self::with_cache(Arc::new(provider), Arc::new(MemoryCache::new()), region)
    }

    /// Create a service sharing an existing provider and cache.
    pub fn with_cache(
        provider: Arc<P>,
        cache: Arc<MemoryCache<AircraftSnapshot>>,
        region: RescanRegion,
    ) -> Self {
        let shared: Arc<dyn ExpiringCache<AircraftSnapshot>> = cache.clone();

        Self {
            search: ProximitySearch::new(provider.clone(), shared.clone()),
            resolver: DetailResolver::new(provider, shared, region),
            cache,
        }
    }

    /// Validate `request` and run the proximity search.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        request.validate()?;
        self.cache.purge_expired();

        let flights =
            self.search
                .search(request.center(), f64::from(request.radius_km), request.limit)?;
        Ok(SearchResponse::from(flights))
    }

    pub fn detail(&self, flight_id: &str) -> FlightDetailResult {
        self.resolver.resolve(flight_id)
    }

    /// Detail lookup that rescans around `hint` first on a cache miss.
    pub fn detail_near(&self, flight_id: &str, hint: GeoPoint) -> FlightDetailResult {
        self.resolver.resolve_near(flight_id, hint)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop expired cache entries, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.cache.purge_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::BoundingBox;
    use crate::provider::ProviderError;
    use serde_json::{json, Value};

    struct OneFlight;

    impl FlightProvider for OneFlight {
        fn name(&self) -> &str {
            "one"
        }

        fn flights_in(
            &self,
            _bounds: &BoundingBox,
        ) -> Result<Vec<AircraftSnapshot>, ProviderError> {
            Ok(vec![AircraftSnapshot {
                id: Some("2f1e8a3b".to_string()),
                latitude: Some(52.2),
                longitude: Some(21.0),
                ..Default::default()
            }])
        }

        fn flight_details(&self, _flight: &AircraftSnapshot) -> Result<Value, ProviderError> {
            Ok(json!({"airline": {"name": "LOT Polish Airlines"}}))
        }
    }

    #[test]
    fn test_search_validates_request() {
        let service = FlightService::new(OneFlight, RescanRegion::default());
        let result = service.search(&SearchRequest::new(52.23, 21.01, 500));

        assert!(matches!(result, Err(SearchError::InvalidRequest { .. })));
        assert_eq!(service.cache_stats().entries, 0);
    }

    #[test]
    fn test_search_then_detail_hits_cache() {
        let service = FlightService::new(OneFlight, RescanRegion::default());

        let response = service.search(&SearchRequest::new(52.23, 21.01, 50)).unwrap();
        assert_eq!(response.count, 1);

        assert!(service.detail("2f1e8a3b").is_found());
        let stats = service.cache_stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_search_purges_expired_entries() {
        let cache: Arc<MemoryCache<AircraftSnapshot>> = Arc::new(MemoryCache::new());
        cache.set("stale", AircraftSnapshot::default(), std::time::Duration::ZERO);
        let service =
            FlightService::with_cache(Arc::new(OneFlight), cache.clone(), RescanRegion::default());
        assert_eq!(service.cache_stats().entries, 1);

        service.search(&SearchRequest::new(52.23, 21.01, 50)).unwrap();

        assert_eq!(cache.len(), 1);
        assert!(cache.get("2f1e8a3b").is_some());
    }

    #[test]
    fn test_service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlightService<OneFlight>>();
    }
}
