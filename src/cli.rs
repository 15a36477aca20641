use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "athenix",
    version,
    about = "Rule-based 12-week workout and nutrition plan generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize config and data directory
    Init,

    /// Ingest and store an onboarding profile snapshot
    Onboard {
        /// Path to a profile JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Generate workout and nutrition plans from the stored profile
    Generate {
        /// Generate from this profile JSON instead of the stored snapshot
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show a stored object
    Show {
        /// What to show
        #[arg(value_enum)]
        target: ShowTarget,
    },

    /// Program position and plan summary
    Status,

    /// Advance the program by one week
    Advance,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShowTarget {
    Plan,
    Nutrition,
    Profile,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (generator.meal_split or generator.bmr_height)
        key: String,
        /// Config value
        value: String,
    },
}
