//! Shared command logic for CLI and REPL
//!
//! Both front ends hash, compare and look up words through these handlers so
//! they print the same thing for the same input.

pub mod core;
pub mod handlers;

// Re-export commonly used types
pub use self::core::{CommandResult, LookupParams, Metric, ParseMetricError, DEFAULT_MAX_DISTANCE};
pub use handlers::compare::{Comparison, HashFormat};
pub use handlers::lookup::Match;
