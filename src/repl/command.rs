//! Command parsing and execution
//!
//! Defines all REPL commands and their execution logic.

use super::state::ReplState;
use crate::commands::handlers::compare::{self, HashFormat};
use crate::commands::handlers::lookup::format_results;
use crate::commands::Metric;
use crate::hash::Hash;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Primary command names, in the order completion offers them
pub const COMMAND_NAMES: &[&str] = &[
    "hash",
    "distance",
    "hamming",
    "similar",
    "load",
    "lookup",
    "metric",
    "max-distance",
    "limit",
    "show-distances",
    "show-hashes",
    "settings",
    "help",
    "exit",
    "quit",
];

const ALIASES: &[&str] = &[
    "h", "dist", "d", "sim", "compare", "find", "q", "max", "show-dist", "set", "options", "?",
];

/// Metric names accepted by `metric`
pub const METRIC_NAMES: &[&str] = &["weighted", "hamming"];

/// Whether `name` (lowercase) is a command or an alias of one
pub fn is_command(name: &str) -> bool {
    COMMAND_NAMES.contains(&name) || ALIASES.contains(&name)
}

/// REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hash word(s): hash <word> [word2] ... [--hex]
    Hash {
        /// Words to hash
        words: Vec<String>,
        /// Render as hexadecimal
        hex: bool,
    },
    /// Weighted distance: distance <a> <b>
    Distance {
        /// First word
        a: String,
        /// Second word
        b: String,
    },
    /// Hamming distance: hamming <a> <b>
    Hamming {
        /// First word
        a: String,
        /// Second word
        b: String,
    },
    /// Similarity check with details: similar <a> <b>
    Similar {
        /// First word
        a: String,
        /// Second word
        b: String,
    },
    /// Load a word list: load <path>
    Load {
        /// Path to word list
        path: PathBuf,
    },
    /// Look up a word in the loaded word list: lookup <word>
    Lookup {
        /// Word to look up
        term: String,
    },
    /// Change metric: metric <weighted|hamming>
    Metric {
        /// Metric to use
        metric: Metric,
    },
    /// Set lookup cutoff: max-distance <n>
    MaxDistance {
        /// Maximum distance (inclusive)
        distance: u32,
    },
    /// Set result limit: limit <n|none>
    Limit {
        /// Result limit
        limit: Option<usize>,
    },
    /// Toggle distance display: show-distances [on|off]
    ShowDistances {
        /// Enable or disable distance display
        enable: Option<bool>,
    },
    /// Toggle hash display: show-hashes [on|off]
    ShowHashes {
        /// Enable or disable hash display
        enable: Option<bool>,
    },
    /// Show settings: settings
    Settings,
    /// Show help: help
    Help,
    /// Exit REPL: exit | quit
    Exit,
}

/// Command result
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Continue REPL
    Continue(String),
    /// Exit REPL
    Exit,
}

impl Command {
    /// Parse command from input string
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(anyhow::anyhow!("Empty command"));
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "hash" | "h" => Self::parse_hash(args),
            "distance" | "dist" | "d" => {
                let (a, b) = Self::parse_pair(args, "distance <a> <b>")?;
                Ok(Self::Distance { a, b })
            }
            "hamming" => {
                let (a, b) = Self::parse_pair(args, "hamming <a> <b>")?;
                Ok(Self::Hamming { a, b })
            }
            "similar" | "sim" | "compare" => {
                let (a, b) = Self::parse_pair(args, "similar <a> <b>")?;
                Ok(Self::Similar { a, b })
            }
            "load" => match args.first() {
                Some(path) => Ok(Self::Load {
                    path: PathBuf::from(path),
                }),
                None => Err(anyhow::anyhow!("Usage: load <path>")),
            },
            "lookup" | "find" | "q" => {
                if args.is_empty() {
                    return Err(anyhow::anyhow!("Usage: lookup <word>"));
                }
                Ok(Self::Lookup {
                    term: args.join(" "),
                })
            }
            "metric" => match args.first() {
                Some(name) => Ok(Self::Metric {
                    metric: name.parse()?,
                }),
                None => Ok(Self::Settings),
            },
            "max-distance" | "max" => match args.first() {
                Some(n) => Ok(Self::MaxDistance {
                    distance: n.parse().context("Invalid distance value")?,
                }),
                None => Ok(Self::Settings),
            },
            "limit" => Self::parse_limit(args),
            "show-distances" | "show-dist" => Ok(Self::ShowDistances {
                enable: Self::parse_toggle(args, "show-distances [on|off]")?,
            }),
            "show-hashes" => Ok(Self::ShowHashes {
                enable: Self::parse_toggle(args, "show-hashes [on|off]")?,
            }),
            "settings" | "set" | "options" => Ok(Self::Settings),
            "help" | "?" => Ok(Self::Help),
            "exit" | "quit" => Ok(Self::Exit),
            _ => Err(anyhow::anyhow!(
                "Unknown command: '{}'. Type 'help' for available commands.",
                cmd
            )),
        }
    }

    fn parse_hash(args: &[&str]) -> Result<Self> {
        let mut words = Vec::new();
        let mut hex = false;

        for arg in args {
            match *arg {
                "--hex" | "-x" => hex = true,
                word => words.push(word.to_string()),
            }
        }

        if words.is_empty() {
            return Err(anyhow::anyhow!("Usage: hash <word> [word2] ... [--hex]"));
        }
        Ok(Self::Hash { words, hex })
    }

    fn parse_pair(args: &[&str], usage: &str) -> Result<(String, String)> {
        match args {
            [a, b] => Ok((a.to_string(), b.to_string())),
            _ => Err(anyhow::anyhow!("Usage: {}", usage)),
        }
    }

    fn parse_toggle(args: &[&str], usage: &str) -> Result<Option<bool>> {
        if args.is_empty() {
            return Ok(None);
        }
        match args[0].to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(Some(true)),
            "off" | "false" | "no" | "0" => Ok(Some(false)),
            _ => Err(anyhow::anyhow!("Usage: {}", usage)),
        }
    }

    fn parse_limit(args: &[&str]) -> Result<Self> {
        let limit = if args.is_empty() || args[0].to_lowercase() == "none" || args[0] == "0" {
            None
        } else {
            Some(args[0].parse().context("Invalid limit value")?)
        };
        Ok(Self::Limit { limit })
    }

    /// Execute command against the REPL state
    pub fn execute(&self, state: &mut ReplState) -> Result<CommandResult> {
        match self {
            Self::Hash { words, hex } => {
                let format = if *hex { HashFormat::Hex } else { HashFormat::Binary };
                Ok(CommandResult::Continue(
                    compare::hash_words(words, format).output,
                ))
            }
            Self::Distance { a, b } => Ok(CommandResult::Continue(
                Hash::new(a).dist(Hash::new(b)).to_string(),
            )),
            Self::Hamming { a, b } => Ok(CommandResult::Continue(
                Hash::new(a).hamming(Hash::new(b)).to_string(),
            )),
            Self::Similar { a, b } => Ok(CommandResult::Continue(
                compare::compare_and_format(a, b, state.show_hashes).output,
            )),
            Self::Load { path } => {
                let count = state.load_from_file(path)?;
                Ok(CommandResult::Continue(format!(
                    "{} Loaded {} word(s) from {}",
                    "✓".green(),
                    count.to_string().bold(),
                    path.display()
                )))
            }
            Self::Lookup { term } => {
                if state.words.is_empty() {
                    return Err(anyhow::anyhow!(
                        "No word list loaded. Use 'load <path>' first."
                    ));
                }
                let results = state.lookup(term);
                Ok(CommandResult::Continue(format_results(
                    &results,
                    state.show_distances,
                )))
            }
            Self::Metric { metric } => {
                state.metric = *metric;
                Ok(CommandResult::Continue(format!("Metric set to {}", metric)))
            }
            Self::MaxDistance { distance } => {
                state.max_distance = *distance;
                Ok(CommandResult::Continue(format!(
                    "Max distance set to {}",
                    distance
                )))
            }
            Self::Limit { limit } => {
                state.result_limit = *limit;
                Ok(CommandResult::Continue(match limit {
                    Some(n) => format!("Result limit set to {}", n),
                    None => "Result limit removed".to_string(),
                }))
            }
            Self::ShowDistances { enable } => {
                state.show_distances = enable.unwrap_or(!state.show_distances);
                Ok(CommandResult::Continue(format!(
                    "Show distances: {}",
                    on_off(state.show_distances)
                )))
            }
            Self::ShowHashes { enable } => {
                state.show_hashes = enable.unwrap_or(!state.show_hashes);
                Ok(CommandResult::Continue(format!(
                    "Show hashes: {}",
                    on_off(state.show_hashes)
                )))
            }
            Self::Settings => Ok(CommandResult::Continue(format_settings(state))),
            Self::Help => Ok(CommandResult::Continue(help_text())),
            Self::Exit => Ok(CommandResult::Exit),
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn format_settings(state: &ReplState) -> String {
    let dict = state
        .dict_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    let limit = state
        .result_limit
        .map(|n| n.to_string())
        .unwrap_or_else(|| "none".to_string());

    [
        format!("{}", "Settings:".bold()),
        format!("  Word list:      {} ({} words)", dict, state.words.len()),
        format!("  Metric:         {}", state.metric),
        format!("  Max distance:   {}", state.max_distance),
        format!("  Limit:          {}", limit),
        format!("  Show distances: {}", on_off(state.show_distances)),
        format!("  Show hashes:    {}", on_off(state.show_hashes)),
    ]
    .join("\n")
}

fn help_text() -> String {
    let commands = [
        ("hash <word>... [--hex]", "Print phonetic hashes"),
        ("distance <a> <b>", "Weighted distance"),
        ("hamming <a> <b>", "Hamming distance"),
        ("similar <a> <b>", "Compare two words in detail"),
        ("load <path>", "Load a word list (one word per line)"),
        ("lookup <word>", "Find similar words in the word list"),
        ("metric <weighted|hamming>", "Metric used by lookup"),
        ("max-distance <n>", "Lookup cutoff (inclusive)"),
        ("limit <n|none>", "Cap the number of lookup results"),
        ("show-distances [on|off]", "Show distances in lookup results"),
        ("show-hashes [on|off]", "Show hashes in comparisons"),
        ("settings", "Show current settings"),
        ("help", "Show this help"),
        ("exit", "Leave the REPL"),
    ];

    let mut lines = vec![format!("{}", "Commands:".bold())];
    for (usage, description) in commands {
        lines.push(format!("  {:28} {}", usage.cyan(), description));
    }
    lines.join("\n")
}
