//! Core command definitions and types shared between CLI and REPL

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::distance::SIMILARITY_THRESHOLD;
use crate::hash::Hash;

/// Distance metric used to rank lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "cli",
    derive(clap::ValueEnum, serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Metric {
    /// Per-byte weighted bit distance
    #[default]
    Weighted,
    /// Plain bit count of the XOR
    Hamming,
}

impl Metric {
    /// Distance between two hashes under this metric
    #[inline]
    pub fn between(self, a: Hash, b: Hash) -> u32 {
        match self {
            Metric::Weighted => a.dist(b),
            Metric::Hamming => a.hamming(b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Weighted => write!(f, "weighted"),
            Metric::Hamming => write!(f, "hamming"),
        }
    }
}

/// Error returned when parsing an unknown metric name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown metric: '{0}'. Valid: weighted, hamming")]
pub struct ParseMetricError(pub String);

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weighted" | "w" | "eudex" => Ok(Metric::Weighted),
            "hamming" | "h" => Ok(Metric::Hamming),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}

/// Default cutoff for lookups: everything [`crate::similar`] would accept
pub const DEFAULT_MAX_DISTANCE: u32 = SIMILARITY_THRESHOLD - 1;

/// Lookup parameters used by both CLI and REPL
#[derive(Debug, Clone)]
pub struct LookupParams {
    /// The word to look up
    pub term: String,
    /// Metric used for ranking
    pub metric: Metric,
    /// Maximum distance (inclusive)
    pub max_distance: u32,
    /// Show distances in results
    pub show_distances: bool,
    /// Limit number of results
    pub limit: Option<usize>,
}

impl LookupParams {
    /// Parameters with defaults for everything but the term
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            metric: Metric::default(),
            max_distance: DEFAULT_MAX_DISTANCE,
            show_distances: false,
            limit: None,
        }
    }
}

/// Formatted output of a shared handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Output message to display
    pub output: String,
}

impl CommandResult {
    /// Create a successful result with output
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}
