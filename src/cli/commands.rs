//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::commands::handlers::compare::{self, HashFormat};
use crate::commands::handlers::lookup;
use crate::commands::{LookupParams, Metric};
use crate::hash::Hash;

use super::args::Commands;
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<()> {
    let config = PersistentConfig::load_from(config_path)?;

    match command {
        Commands::Repl { .. } => {
            // Handled in the binary
            bail!("REPL command must be launched from the binary entry point")
        }
        Commands::Hash { words, hex } => cmd_hash(&words, hex),
        Commands::Distance { a, b, metric } => cmd_distance(&a, &b, metric.unwrap_or(config.metric)),
        Commands::Similar { a, b } => cmd_similar(&a, &b),
        Commands::Compare { a, b } => cmd_compare(&a, &b, &config),
        Commands::Lookup {
            term,
            dict,
            metric,
            max_distance,
            show_distances,
            limit,
        } => {
            let merged = config.merge_with_cli(dict, metric, max_distance, limit, show_distances);
            cmd_lookup(&term, &merged)
        }
        Commands::Demo => {
            println!("{}", demo_report());
            Ok(())
        }
        Commands::Config {
            show,
            reset,
            set_dict,
            set_metric,
            set_max_distance,
            set_limit,
        } => cmd_config(
            config,
            config_path,
            show,
            reset,
            set_dict,
            set_metric,
            set_max_distance,
            set_limit,
        ),
    }
}

fn cmd_hash(words: &[String], hex: bool) -> Result<()> {
    let format = if hex { HashFormat::Hex } else { HashFormat::Binary };
    println!("{}", compare::hash_words(words, format).output);
    Ok(())
}

fn cmd_distance(a: &str, b: &str, metric: Metric) -> Result<()> {
    let distance = metric.between(Hash::new(a), Hash::new(b));
    debug!(a, b, %metric, distance, "distance");
    println!("{}", distance);
    Ok(())
}

fn cmd_similar(a: &str, b: &str) -> Result<()> {
    println!("{}", crate::similar(a, b));
    Ok(())
}

fn cmd_compare(a: &str, b: &str, config: &PersistentConfig) -> Result<()> {
    println!("{}", compare_report(a, b, config));
    Ok(())
}

fn compare_report(a: &str, b: &str, config: &PersistentConfig) -> String {
    compare::compare_and_format(a, b, config.show_hashes).output
}

fn cmd_lookup(term: &str, config: &PersistentConfig) -> Result<()> {
    let dict = config
        .dict_path
        .as_deref()
        .context("No word list given. Use --dict or set one with `config --set-dict`")?;

    let words = read_word_list(dict)?;
    let params = LookupParams {
        term: term.to_string(),
        metric: config.metric,
        max_distance: config.max_distance,
        show_distances: config.show_distances,
        limit: config.limit,
    };

    let result = lookup::lookup_and_format(&words, &params);
    println!("{}", result.output);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    mut config: PersistentConfig,
    config_path: Option<&Path>,
    show: bool,
    reset: bool,
    set_dict: Option<PathBuf>,
    set_metric: Option<Metric>,
    set_max_distance: Option<u32>,
    set_limit: Option<usize>,
) -> Result<()> {
    let mut modified = false;

    if reset {
        config = PersistentConfig::default();
        modified = true;
    }
    if let Some(path) = set_dict {
        config.dict_path = Some(path);
        modified = true;
    }
    if let Some(metric) = set_metric {
        config.metric = metric;
        modified = true;
    }
    if let Some(max_distance) = set_max_distance {
        config.max_distance = max_distance;
        modified = true;
    }
    if let Some(limit) = set_limit {
        config.limit = (limit > 0).then_some(limit);
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        let path = config_file_path_with_override(config_path)?;
        info!(path = %path.display(), "configuration updated");
        println!("{} {}", "Saved".green().bold(), path.display());
    }

    if show || !modified {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    Ok(())
}

/// Read a word list, one word per line
///
/// Surrounding whitespace is trimmed; blank lines and lines starting with `#`
/// are skipped.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open word list: {}", path.display()))?;

    let mut words = Vec::new();
    for line in std::io::BufReader::new(file).lines() {
        let line =
            line.with_context(|| format!("Failed to read word list: {}", path.display()))?;
        let word = line.trim();
        if !word.is_empty() && !word.starts_with('#') {
            words.push(word.to_string());
        }
    }

    info!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// The canned demonstration: two hashes and a handful of comparisons
pub fn demo_report() -> String {
    let mut lines = vec![
        Hash::new("Jeff Buckley").to_string(),
        Hash::new("Tim Buckley").to_string(),
    ];

    for (a, b) in [("Jonny", "Johnny"), ("Jonny", "Jahnny"), ("Jonny", "Jenny")] {
        lines.push(crate::similar(a, b).to_string());
    }
    for (a, b) in [("Jonny", "Jenny"), ("Jonny", "Jentny")] {
        lines.push(crate::string_distance(a, b).to_string());
    }
    lines.push(crate::similar("Trimothy", "Tony").to_string());

    lines.join("\n")
}
