//! Interactive REPL for libeudex
//!
//! Hash and compare words, then look them up in a word list loaded from disk.

pub mod command;
pub mod helper;
pub mod highlighter;
pub mod state;

pub use command::{Command, CommandResult};
pub use helper::EudexHelper;
pub use state::ReplState;

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<std::path::PathBuf>,
    /// Maximum history entries
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "eudex> ".to_string(),
            history_file: Some(crate::cli::paths::history_path()),
            max_history: 1000,
        }
    }
}
