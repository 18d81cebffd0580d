//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Inspect and edit the TV client's user preferences.
#[derive(Parser)]
#[command(name = "tvprefs")]
#[command(about = "Inspect and edit TV client user preferences")]
#[command(version)]
pub struct Cli {
    /// Preference database to use instead of the default location
    #[arg(long = "db", env = "TVPREFS_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
