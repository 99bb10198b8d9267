//! Rustyline helper integration
//!
//! Provides completion, hinting, highlighting, and validation for the REPL.

use super::command::{COMMAND_NAMES, METRIC_NAMES};
use super::highlighter::CommandHighlighter;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;

const TOGGLES: &[&str] = &["on", "off"];

/// REPL helper
pub struct EudexHelper {
    highlighter: CommandHighlighter,
    hinter: HistoryHinter,
    files: FilenameCompleter,
}

impl EudexHelper {
    /// Create a new helper instance
    pub fn new() -> Self {
        Self {
            highlighter: CommandHighlighter::new(),
            hinter: HistoryHinter::new(),
            files: FilenameCompleter::new(),
        }
    }
}

impl Default for EudexHelper {
    fn default() -> Self {
        Self::new()
    }
}

fn candidates(options: &[&str], prefix: &str, trailing_space: bool) -> Vec<Pair> {
    options
        .iter()
        .filter(|o| o.starts_with(prefix))
        .map(|o| Pair {
            display: o.to_string(),
            replacement: if trailing_space {
                format!("{} ", o)
            } else {
                o.to_string()
            },
        })
        .collect()
}

impl Helper for EudexHelper {}

impl Completer for EudexHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let head = &line[..pos];
        let parts: Vec<&str> = head.split_whitespace().collect();
        let start = head.rfind(char::is_whitespace).map(|i| i + 1).unwrap_or(0);
        let typing_new_word = head.ends_with(char::is_whitespace);

        if parts.is_empty() {
            return Ok((0, candidates(COMMAND_NAMES, "", true)));
        }

        let cmd = parts[0].to_lowercase();
        if parts.len() == 1 && !typing_new_word {
            return Ok((start, candidates(COMMAND_NAMES, &cmd, true)));
        }

        let prefix = if typing_new_word {
            String::new()
        } else {
            parts.last().map(|s| s.to_lowercase()).unwrap_or_default()
        };
        let first_arg = parts.len() == 1 || (parts.len() == 2 && !typing_new_word);

        match cmd.as_str() {
            "load" if first_arg => self.files.complete(line, pos, ctx),
            "metric" if first_arg => Ok((start, candidates(METRIC_NAMES, &prefix, false))),
            "show-distances" | "show-dist" | "show-hashes" if first_arg => {
                Ok((start, candidates(TOGGLES, &prefix, false)))
            }
            _ => Ok((pos, vec![])),
        }
    }
}

impl Hinter for EudexHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for EudexHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: bool) -> bool {
        self.highlighter.highlight_char(line, pos, forced)
    }
}

impl Validator for EudexHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}
