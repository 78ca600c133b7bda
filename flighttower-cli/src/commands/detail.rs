//! Flight detail command.

use clap::Args;
use flighttower::geo::GeoPoint;

use crate::commands::common::print_json;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for `flighttower detail`.
#[derive(Debug, Args)]
pub struct DetailArgs {
    /// Flight identifier as returned by `search`
    pub id: String,

    /// Latitude to scan around before the configured rescan region
    #[arg(long, requires = "near_lon", allow_hyphen_values = true)]
    pub near_lat: Option<f64>,

    /// Longitude to scan around before the configured rescan region
    #[arg(long, requires = "near_lat", allow_hyphen_values = true)]
    pub near_lon: Option<f64>,
}

impl DetailArgs {
    fn hint(&self) -> Option<GeoPoint> {
        match (self.near_lat, self.near_lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }
}

/// Run the detail command.
///
/// Not-found and upstream failures are printed as placeholder records and
/// still exit successfully.
pub fn run(runner: &CliRunner, args: DetailArgs) -> Result<(), CliError> {
    runner.log_startup("detail");

    let service = runner.create_service()?;
    let result = match args.hint() {
        Some(hint) => service.detail_near(&args.id, hint),
        None => service.detail(&args.id),
    };

    print_json(&result.to_response())
}
