//! satview CLI - headless driver for the satellite map core
//!
//! Loads the tile window around a position from a MapBox-compatible tile
//! service and reports what happened. Useful for checking credentials,
//! warming up a provider and inspecting coordinates.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::locate::LocateArgs;
use commands::run::RunArgs;

#[derive(Parser)]
#[command(name = "satview")]
#[command(version = satview::VERSION)]
#[command(about = "Satellite slippy-map tile loader", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file (~/.satview/config.ini)
    Init,

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show the world pixel, tile and URL for a position
    Locate {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Zoom level (0-19)
        #[arg(long, default_value = "15")]
        zoom: u8,
    },

    /// Load the 9x9 tile window around a position
    Run {
        /// Latitude in decimal degrees (default: config map.latitude)
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude in decimal degrees (default: config map.longitude)
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Zoom level 0-19 (default: config map.zoom)
        #[arg(long)]
        zoom: Option<u8>,

        /// Tile service access token (default: config provider.access_token)
        #[arg(long)]
        access_token: Option<String>,

        /// Give up after this many seconds
        #[arg(long, default_value = "120")]
        timeout: u64,

        /// Write the loaded tiles as one PNG image
        #[arg(long)]
        mosaic: Option<PathBuf>,

        /// Enable debug-level logging
        #[arg(long)]
        debug: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Config { command } => commands::config::run(command),
        Commands::Locate { lat, lon, zoom } => {
            commands::locate::run(LocateArgs { lat, lon, zoom })
        }
        Commands::Run {
            lat,
            lon,
            zoom,
            access_token,
            timeout,
            mosaic,
            debug,
        } => commands::run::run(RunArgs {
            lat,
            lon,
            zoom,
            access_token,
            timeout,
            mosaic,
            debug,
        }),
    };

    if let Err(e) = result {
        e.exit();
    }
}
