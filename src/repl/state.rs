//! REPL state management
//!
//! Holds the loaded word list and the lookup settings.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::commands::read_word_list;
use crate::cli::paths::PersistentConfig;
use crate::commands::handlers::lookup::{execute_lookup, Match};
use crate::commands::{LookupParams, Metric};

/// REPL state
pub struct ReplState {
    /// Words loaded from a word list
    pub words: Vec<String>,
    /// Where `words` came from
    pub dict_path: Option<PathBuf>,
    /// Lookup metric
    pub metric: Metric,
    /// Lookup cutoff (inclusive)
    pub max_distance: u32,
    /// Show distances in lookup results
    pub show_distances: bool,
    /// Show hashes in comparisons
    pub show_hashes: bool,
    /// Result limit
    pub result_limit: Option<usize>,
    /// Custom config file, if any
    pub config_file_path: Option<PathBuf>,
}

impl ReplState {
    /// Create a new REPL state with default settings
    pub fn new() -> Self {
        Self::from_config(&PersistentConfig::default())
    }

    /// Create a REPL state from persisted settings (the word list is not loaded)
    pub fn from_config(config: &PersistentConfig) -> Self {
        Self {
            words: Vec::new(),
            dict_path: config.dict_path.clone(),
            metric: config.metric,
            max_distance: config.max_distance,
            show_distances: config.show_distances,
            show_hashes: config.show_hashes,
            result_limit: config.limit,
            config_file_path: None,
        }
    }

    /// Replace the word list with the contents of a file
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize> {
        self.words = read_word_list(path)?;
        self.dict_path = Some(path.to_path_buf());
        Ok(self.words.len())
    }

    /// Look up a word in the loaded word list using the current settings
    pub fn lookup(&self, term: &str) -> Vec<Match> {
        let params = self.lookup_params(term);
        execute_lookup(&self.words, &params)
    }

    /// Lookup parameters for the current settings
    pub fn lookup_params(&self, term: &str) -> LookupParams {
        LookupParams {
            term: term.to_string(),
            metric: self.metric,
            max_distance: self.max_distance,
            show_distances: self.show_distances,
            limit: self.result_limit,
        }
    }

    /// Convert current state to a persistent config
    pub fn to_persistent_config(&self) -> PersistentConfig {
        PersistentConfig {
            dict_path: self.dict_path.clone(),
            metric: self.metric,
            max_distance: self.max_distance,
            limit: self.result_limit,
            show_distances: self.show_distances,
            show_hashes: self.show_hashes,
        }
    }

    /// Persist the current settings
    pub fn save_config(&self) -> Result<()> {
        debug!("saving REPL settings");
        self.to_persistent_config()
            .save_to(self.config_file_path.as_deref())
    }
}

impl Default for ReplState {
    fn default() -> Self {
        Self::new()
    }
}
