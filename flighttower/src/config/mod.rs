//! User configuration for flighttower.
//!
//! Configuration lives in `~/.flighttower/config.ini`. A missing file means
//! defaults; invalid values are rejected with the offending section and key.
//!
//! # Example
//!
//! ```no_run
//! use flighttower::config::ConfigFile;
//!
//! let config = ConfigFile::load()?;
//! let region = config.rescan_region();
//! println!("rescanning {} km around {:?}", region.radius_km, region.center);
//! # Ok::<(), flighttower::config::ConfigFileError>(())
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, RescanSettings, SearchSettings, UpstreamSettings};
