//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "actiontrack",
    version,
    about = "Parse poker hand histories into Hero behavior records"
)]
pub struct ActionTrackCli {
    /// Player name to analyze (overrides ACTIONTRACK_HERO and the config file)
    #[arg(long, global = true)]
    pub hero: Option<String>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a log file or directory and write one JSON record per hand
    Parse {
        #[arg(long)]
        input: String,
        /// Write JSON Lines here instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
    /// Parse logs and store new hands in the database
    Import {
        #[arg(long)]
        input: String,
        #[arg(long)]
        db: Option<String>,
    },
    /// List stored hands, newest first
    Hands {
        #[arg(long)]
        db: Option<String>,
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// Aggregate Hero statistics from logs or from the database
    Stats {
        #[arg(long, conflicts_with = "db")]
        input: Option<String>,
        #[arg(long)]
        db: Option<String>,
        /// Group statistics by Hero's position
        #[arg(long)]
        by_position: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
