//! Nearby flight search command.

use clap::Args;
use flighttower::flights::{FlightDetailResponse, SearchResponse};
use serde::Serialize;
use serde_json::Map;

use crate::commands::common::print_json;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for `flighttower search`.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Latitude of the search center in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the search center in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Search radius in kilometers (5-100, default from config)
    #[arg(long)]
    pub radius_km: Option<u32>,

    /// Maximum number of flights (1-50, default from config)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Also look up details for every flight found
    #[arg(long)]
    pub details: bool,
}

#[derive(Serialize)]
struct SearchOutput {
    #[serde(flatten)]
    response: SearchResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Map<String, serde_json::Value>>,
}

/// Run the search command.
pub fn run(runner: &CliRunner, args: SearchArgs) -> Result<(), CliError> {
    runner.log_startup("search");

    let service = runner.create_service()?;
    let request = runner
        .config()
        .search_request(args.lat, args.lon, args.radius_km, args.limit);
    let response = service.search(&request)?;

    let details = if args.details {
        let mut details = Map::new();
        for id in response.flights.iter().filter_map(|f| f.id.as_deref()) {
            let detail: FlightDetailResponse = service.detail(id).to_response();
            details.insert(id.to_string(), serde_json::to_value(detail)?);
        }
        Some(details)
    } else {
        None
    };

    let stats = service.cache_stats();
    tracing::debug!(
        hits = stats.hits,
        misses = stats.misses,
        expired = stats.expired,
        entries = stats.entries,
        hit_rate = stats.hit_rate(),
        "Cache statistics"
    );

    print_json(&SearchOutput { response, details })
}
