//! Syntax highlighting for REPL input

use colored::Colorize;
use rustyline::highlight::Highlighter;
use std::borrow::Cow;

use super::command::{is_command, METRIC_NAMES};

/// Command highlighter
///
/// Known commands are bold blue, flags yellow, numbers magenta and metric
/// names cyan. Unknown commands are left untouched.
#[derive(Debug, Default)]
pub struct CommandHighlighter;

impl CommandHighlighter {
    /// Create a new highlighter
    pub fn new() -> Self {
        Self
    }

    fn highlight_line(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        let Some(cmd) = trimmed.split_whitespace().next() else {
            return line.to_string();
        };

        if !is_command(&cmd.to_lowercase()) {
            return line.to_string();
        }

        let indent = &line[..line.len() - trimmed.len()];
        let rest = &trimmed[cmd.len()..];
        format!("{}{}{}", indent, cmd.blue().bold(), highlight_args(rest))
    }
}

fn highlight_args(args: &str) -> String {
    let mut result = String::with_capacity(args.len());

    for part in args.split_whitespace() {
        result.push(' ');

        if part.starts_with('-') {
            result.push_str(&part.yellow().to_string());
        } else if part.parse::<u64>().is_ok() {
            result.push_str(&part.magenta().to_string());
        } else if METRIC_NAMES.contains(&part.to_lowercase().as_str()) {
            result.push_str(&part.cyan().to_string());
        } else {
            result.push_str(part);
        }
    }

    result
}

impl Highlighter for CommandHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlight_line(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_untouched() {
        colored::control::set_override(false);
        let highlighter = CommandHighlighter::new();
        assert_eq!(highlighter.highlight_line("frobnicate x"), "frobnicate x");
        assert_eq!(highlighter.highlight_line("   "), "   ");
    }

    #[test]
    fn test_known_command_keeps_text() {
        colored::control::set_override(false);
        let highlighter = CommandHighlighter::new();
        assert_eq!(
            highlighter.highlight_line("hash java --hex"),
            "hash java --hex"
        );
    }
}
