//! Default paths and configuration file management

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::commands::{Metric, DEFAULT_MAX_DISTANCE};

/// Get the configuration directory for libeudex
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("libeudex"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// Get the REPL history file path
pub fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".libeudex_history")
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default word list for lookups
    pub dict_path: Option<PathBuf>,
    /// Default lookup metric
    pub metric: Metric,
    /// Default lookup cutoff (inclusive)
    pub max_distance: u32,
    /// Default result limit
    pub limit: Option<usize>,
    /// Show distances in lookup results
    pub show_distances: bool,
    /// Show hashes in comparisons
    pub show_hashes: bool,
}

impl PersistentConfig {
    /// Load configuration from custom path
    ///
    /// A missing file yields the defaults.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        dict_path: Option<PathBuf>,
        metric: Option<Metric>,
        max_distance: Option<u32>,
        limit: Option<usize>,
        show_distances: bool,
    ) -> Self {
        Self {
            dict_path: dict_path.or_else(|| self.dict_path.clone()),
            metric: metric.unwrap_or(self.metric),
            max_distance: max_distance.unwrap_or(self.max_distance),
            limit: limit.or(self.limit),
            show_distances: show_distances || self.show_distances,
            show_hashes: self.show_hashes,
        }
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            dict_path: None,
            metric: Metric::Weighted,
            max_distance: DEFAULT_MAX_DISTANCE,
            limit: None,
            show_distances: false,
            show_hashes: true,
        }
    }
}
