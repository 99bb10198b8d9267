//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::Metric;

#[derive(Parser)]
#[command(name = "libeudex")]
#[command(about = "Phonetic fingerprints for fuzzy word matching")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive REPL
    Repl {
        /// Word list to load (one word per line)
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Distance metric for lookups
        #[arg(long)]
        metric: Option<Metric>,

        /// Maximum distance for lookups
        #[arg(short = 'm', long)]
        max_distance: Option<u32>,

        /// Show distances in lookup results
        #[arg(short = 's', long)]
        show_distances: bool,

        /// Result limit
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the phonetic hash of each word
    Hash {
        /// Words to hash
        #[arg(required = true)]
        words: Vec<String>,

        /// Print hexadecimal instead of binary
        #[arg(short = 'x', long)]
        hex: bool,
    },

    /// Print the distance between two words
    Distance {
        /// First word
        a: String,

        /// Second word
        b: String,

        /// Distance metric
        #[arg(short, long)]
        metric: Option<Metric>,
    },

    /// Tell whether two words sound alike
    Similar {
        /// First word
        a: String,

        /// Second word
        b: String,
    },

    /// Compare two words in detail (hashes, both distances, verdict)
    Compare {
        /// First word
        a: String,

        /// Second word
        b: String,
    },

    /// Find words in a word list that sound like the given word
    Lookup {
        /// Word to look up
        term: String,

        /// Word list (one word per line)
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Distance metric
        #[arg(long)]
        metric: Option<Metric>,

        /// Maximum distance (inclusive)
        #[arg(short = 'm', long)]
        max_distance: Option<u32>,

        /// Show distances
        #[arg(short = 's', long)]
        show_distances: bool,

        /// Limit results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Run the canned demonstration comparisons
    Demo,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,

        /// Set default word list
        #[arg(long)]
        set_dict: Option<PathBuf>,

        /// Set default metric
        #[arg(long)]
        set_metric: Option<Metric>,

        /// Set default maximum distance
        #[arg(long)]
        set_max_distance: Option<u32>,

        /// Set default result limit (0 for none)
        #[arg(long)]
        set_limit: Option<usize>,
    },
}
