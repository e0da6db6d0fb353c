//! TileGrid CLI - Command-line interface
//!
//! Locates points on the slippy-map tile grid, reports tile bounds and
//! centers, enumerates the regions under an area, and manages the
//! configuration file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tilegrid::logging::init_logging;
use tilegrid::TileCoord;

mod commands;
mod error;
mod output;

use commands::common::{load_config, Context, FormatArg};
use commands::config::ConfigCommands;
use commands::cover::{Bounds, DEFAULT_MAX_REGIONS};
use error::CliError;

/// Slippy-map tile regions for geospatial indexing
#[derive(Debug, Parser)]
#[command(name = "tilegrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Zoom level (0-18), overrides [grid] zoom
    #[arg(short, long, global = true)]
    zoom: Option<u8>,

    /// Output format, overrides [output] format
    #[arg(short, long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Config file to use instead of ~/.tilegrid/config.ini
    #[arg(short, long, env = "TILEGRID_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find the region containing a coordinate
    Locate {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Show the bounds and center of a tile
    Center {
        /// Tile as zoom/x/y (e.g., 10/511/340)
        tile: TileCoord,
    },

    /// List every region under an area
    Cover {
        /// Latitude of the north edge
        #[arg(long, allow_negative_numbers = true)]
        north: f64,

        /// Longitude of the west edge
        #[arg(long, allow_negative_numbers = true)]
        west: f64,

        /// Latitude of the south edge
        #[arg(long, allow_negative_numbers = true)]
        south: f64,

        /// Longitude of the east edge
        #[arg(long, allow_negative_numbers = true)]
        east: f64,

        /// Refuse areas that expand to more regions than this
        #[arg(long, default_value_t = DEFAULT_MAX_REGIONS)]
        max_regions: usize,
    },

    /// Check whether two tiles overlap
    Overlap {
        /// First tile as zoom/x/y
        first: TileCoord,

        /// Second tile as zoom/x/y
        second: TileCoord,
    },

    /// Check whether a tile contains a coordinate
    Contains {
        /// Tile as zoom/x/y
        tile: TileCoord,

        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Skips config validation so a bad value can still be repaired.
        Commands::Config { command } => commands::config::run(command, cli.config.as_deref()),
        command => {
            let config = load_config(cli.config.as_deref())?;
            let _logging_guard = init_logging(&config.logging)
                .map_err(|e| CliError::LoggingInit(e.to_string()))?;

            tracing::debug!(?command, "Starting");

            let ctx = Context::resolve(cli.zoom, cli.format, &config)?;
            dispatch(&ctx, command)
        }
    }
}

fn dispatch(ctx: &Context, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Locate { lat, lon } => commands::locate::run(ctx, lat, lon),
        Commands::Center { tile } => commands::center::run(ctx, tile),
        Commands::Cover {
            north,
            west,
            south,
            east,
            max_regions,
        } => commands::cover::run(
            ctx,
            Bounds {
                north,
                west,
                south,
                east,
            },
            max_regions,
        ),
        Commands::Overlap { first, second } => commands::overlap::run_overlap(ctx, first, second),
        Commands::Contains { tile, lat, lon } => {
            commands::overlap::run_contains(ctx, tile, lat, lon)
        }
        // Handled in `run` before the config file is loaded.
        Commands::Config { .. } => Ok(()),
    }
}
