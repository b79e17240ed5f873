use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for jpregion
#[derive(Debug, Parser)]
#[command(
    name = "jpregion",
    version,
    about = "CLI for looking up Japanese administrative regions"
)]
pub struct CliArgs {
    /// Directory holding `<scope>.json` definition files (default: the bundled data dir)
    #[arg(short = 'd', long = "data-dir", global = true, conflicts_with = "bundled")]
    pub data_dir: Option<PathBuf>,

    /// Use the dataset compiled into the binary instead of reading files
    #[arg(long, global = true)]
    pub bundled: bool,

    /// Locale used to resolve names (e.g. en); base names when omitted
    #[arg(short = 'l', long = "locale", global = true)]
    pub locale: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lookup a region by its composite id
    Get {
        /// Region id (e.g. JP-13)
        id: String,
    },

    /// Show every region of a country or parent region
    All {
        /// ISO2 country code (e.g. JP)
        country: String,

        /// Parent region id (e.g. JP-13)
        #[arg(short = 'p', long = "parent")]
        parent: Option<String>,
    },

    /// List region names keyed by id
    List {
        /// ISO2 country code (e.g. JP)
        country: String,

        /// Parent region id (e.g. JP-13)
        #[arg(short = 'p', long = "parent")]
        parent: Option<String>,
    },
}
