//! Subcommand definitions.

use clap::Subcommand;
use tvprefs_core::Setting;

/// Top-level commands. Settings are named by symbolic name or store key.
#[derive(Subcommand)]
pub enum Commands {
    /// List every setting with its current value
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the current value of one setting
    Get {
        /// Setting name (e.g. videoPlayer) or key (e.g. pref_video_player)
        setting: Setting,
    },
    /// Store a new value for a setting
    Set {
        /// Setting name or key
        setting: Setting,
        /// New value; booleans accept true/false, 1/0, yes/no, on/off
        value: String,
    },
    /// Remove stored values so defaults apply again
    Reset {
        /// Setting name or key
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        setting: Option<Setting>,
        /// Reset every setting
        #[arg(long)]
        all: bool,
    },
    /// Show the stored preference schema version
    Version,
    /// Show the resolved data directory and database file
    Paths,
}
