//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pitwall")]
#[command(about = "Browse the cars and tracks of an Assetto Corsa install", long_about = None)]
pub(crate) struct Cli {
    /// Game install folder (defaults to game.install_path in settings.toml)
    #[arg(long, global = true)]
    pub install: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List cars, optionally filtered
    Cars {
        /// Cars folder to scan (default: <install>/content/cars)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Case-insensitive search over name, brand, class and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only cars from this year
        #[arg(long)]
        year: Option<i32>,

        /// Only cars of this class (e.g., GT3)
        #[arg(long)]
        class: Option<String>,

        /// Only cars of this brand
        #[arg(long)]
        brand: Option<String>,

        /// Print the records as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// List track layouts, optionally filtered
    Tracks {
        /// Tracks folder to scan (default: <install>/content/tracks)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Case-insensitive search over name, description, country, city and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only tracks from this year
        #[arg(long)]
        year: Option<i32>,

        /// Only tracks in this country
        #[arg(long)]
        country: Option<String>,

        /// Print the records as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Parse a metadata file, repairing it if needed, and print it as JSON
    Parse {
        /// Path to a ui_car.json or ui_track.json file
        file: PathBuf,
    },

    /// Show which badge image a brand resolves to
    Badge {
        /// Brand name as written in car metadata (e.g., "Mercedes-AMG")
        brand: String,
    },

    /// Show settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings and resolved folders
    Show,

    /// Print the settings file path
    Path,
}
