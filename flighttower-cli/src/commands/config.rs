//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show`, and `config init` commands for
//! locating, inspecting and creating the configuration file.

use std::path::Path;

use clap::Subcommand;
use flighttower::config::ConfigFile;

use crate::commands::common::{config_path, load_config};
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, override_path: Option<&Path>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(override_path),
        ConfigCommands::Show => run_show(override_path),
        ConfigCommands::Init { force } => run_init(override_path, force),
    }
}

fn run_path(override_path: Option<&Path>) -> Result<(), CliError> {
    println!("{}", config_path(override_path).display());
    Ok(())
}

fn run_show(override_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(override_path)?;
    for line in settings_lines(&config) {
        println!("{}", line);
    }
    Ok(())
}

fn run_init(override_path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let path = config_path(override_path);

    if force {
        ConfigFile::default().save_to(&path)?;
        println!("Wrote default configuration to {}", path.display());
    } else if ConfigFile::ensure_exists_at(&path)? {
        println!("Created {}", path.display());
    } else {
        println!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Ok(())
}

/// Effective settings as `section.key = value` lines.
fn settings_lines(config: &ConfigFile) -> Vec<String> {
    vec![
        format!("upstream.feed_url = {}", config.upstream.feed_url),
        format!("upstream.details_url = {}", config.upstream.details_url),
        format!("upstream.timeout = {}", config.upstream.timeout),
        format!("search.radius_km = {}", config.search.radius_km),
        format!("search.limit = {}", config.search.limit),
        format!("rescan.latitude = {}", config.rescan.latitude),
        format!("rescan.longitude = {}", config.rescan.longitude),
        format!("rescan.radius_km = {}", config.rescan.radius_km),
        format!("logging.file = {}", config.logging.file.display()),
    ]
}
