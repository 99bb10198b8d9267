//! CLI interface for libeudex
//!
//! Provides command-line utilities for hashing, comparing and looking up words.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands};
pub use commands::{demo_report, read_word_list};
pub use paths::{config_dir, PersistentConfig};
