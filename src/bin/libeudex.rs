//! libeudex - Phonetic hashing and fuzzy name matching
//!
//! Provides CLI utilities and an interactive REPL built on the Eudex hash.

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

use libeudex::cli::commands;
use libeudex::cli::paths::PersistentConfig;
use libeudex::cli::{Cli, Commands};
use libeudex::commands::Metric;
use libeudex::repl::{Command, CommandResult, EudexHelper, ReplConfig, ReplState};
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Repl {
            dict,
            metric,
            max_distance,
            show_distances,
            limit,
        } => run_repl(config_path, dict, metric, max_distance, show_distances, limit),
        command => commands::execute(command, config_path),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run_repl(
    config_path: Option<&Path>,
    dict_path: Option<PathBuf>,
    metric: Option<Metric>,
    max_distance: Option<u32>,
    show_distances: bool,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let config = PersistentConfig::load_from(config_path)?;
    let merged = config.merge_with_cli(dict_path, metric, max_distance, limit, show_distances);

    print_banner();

    let mut state = ReplState::from_config(&merged);
    state.config_file_path = config_path.map(Path::to_path_buf);

    if let Some(path) = merged.dict_path.as_deref() {
        if path.exists() {
            println!(
                "  Loading word list from {}...",
                path.display().to_string().cyan()
            );
            match state.load_from_file(path) {
                Ok(count) => println!("  Loaded {} word(s)", count.to_string().green().bold()),
                Err(e) => eprintln!("  {}: {:#}", "Warning".yellow(), e),
            }
            println!();
        }
    }

    let repl_config = ReplConfig::default();

    let rustyline_config = Config::builder()
        .max_history_size(repl_config.max_history)?
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();

    let mut editor: Editor<EudexHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rustyline_config)?;
    editor.set_helper(Some(EudexHelper::new()));

    if let Some(history_path) = &repl_config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    loop {
        let context = format!("{}/d{}", state.metric, state.max_distance).bright_magenta();
        let prompt = format!("{} {}", context, repl_config.prompt.as_str().bright_cyan().bold());

        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line).and_then(|cmd| cmd.execute(&mut state)) {
            Ok(CommandResult::Continue(output)) => println!("{}", output),
            Ok(CommandResult::Exit) => break,
            Err(e) => eprintln!("{}: {:#}", "Error".red().bold(), e),
        }
    }

    if let Some(history_path) = &repl_config.history_file {
        if let Err(e) = editor.save_history(history_path) {
            eprintln!("{}: Failed to save history: {}", "Warning".yellow(), e);
        }
    }

    if let Err(e) = state.save_config() {
        eprintln!("{}: Failed to save config: {:#}", "Warning".yellow(), e);
    }

    Ok(())
}

fn print_banner() {
    let rule = "═══════════════════════════════════════════════════════".bright_cyan();
    println!();
    println!("{}", rule);
    println!(
        "{}",
        "   libeudex - Phonetic Hashing and Name Matching"
            .bright_cyan()
            .bold()
    );
    println!("{}", rule);
    println!();
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!("  Type {} for available commands", "'help'".yellow().bold());
    println!(
        "  Type {} or press {} to exit",
        "'exit'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!();
    println!("{}", "  Quick Start:".bold());
    println!("    • Compare two names: {}", "similar Jonny Johnny".cyan());
    println!("    • Load a word list:  {}", "load /usr/share/dict/words".cyan());
    println!("    • Find sound-alikes: {}", "lookup meyer".cyan());
    println!();
}
