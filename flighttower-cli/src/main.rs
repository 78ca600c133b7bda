//! flighttower CLI - Command-line interface
//!
//! This binary provides a command-line interface to the flighttower library:
//! nearby flight search and flight detail lookup, printed as JSON.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::detail::DetailArgs;
use commands::search::SearchArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "flighttower")]
#[command(version = flighttower::VERSION)]
#[command(about = "Find live flights near a location and look up their details", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.flighttower/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the flights nearest to a location
    Search(SearchArgs),

    /// Look up details for a flight
    Detail(DetailArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Search(args) => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            commands::search::run(&runner, args)
        }
        Commands::Detail(args) => {
            let runner = CliRunner::new(config_path, cli.debug)?;
            commands::detail::run(&runner, args)
        }
        Commands::Config(command) => commands::config::run(command, config_path),
    }
}
