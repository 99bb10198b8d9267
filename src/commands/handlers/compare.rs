//! Shared hash and comparison handlers

use crate::commands::core::CommandResult;
use crate::hash::Hash;

/// How a hash is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashFormat {
    /// 64 binary digits, most significant bit first
    #[default]
    Binary,
    /// 16 hexadecimal digits
    Hex,
}

/// Render one hash
pub fn render_hash(hash: Hash, format: HashFormat) -> String {
    match format {
        HashFormat::Binary => hash.to_string(),
        HashFormat::Hex => format!("{:016x}", hash),
    }
}

/// Hash every word and list them as `word<TAB>hash`
pub fn hash_words<S: AsRef<str>>(words: &[S], format: HashFormat) -> CommandResult {
    let output = words
        .iter()
        .map(|w| {
            let word = w.as_ref();
            format!("{}\t{}", word, render_hash(Hash::new(word), format))
        })
        .collect::<Vec<_>>()
        .join("\n");

    CommandResult::success(output)
}

/// Full comparison of two words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Hash of the first word
    pub left: Hash,
    /// Hash of the second word
    pub right: Hash,
    /// Weighted distance
    pub distance: u32,
    /// Hamming distance
    pub hamming: u32,
    /// Similarity verdict
    pub similar: bool,
}

impl Comparison {
    /// Compare two words
    pub fn of(a: &str, b: &str) -> Self {
        let left = Hash::new(a);
        let right = Hash::new(b);
        let diff = left - right;

        Self {
            left,
            right,
            distance: diff.dist(),
            hamming: diff.hamming(),
            similar: diff.similar(),
        }
    }
}

/// Format a comparison for display
///
/// With `show_hashes` the two hashes are printed above the distances.
pub fn format_comparison(a: &str, b: &str, cmp: &Comparison, show_hashes: bool) -> String {
    let mut lines = Vec::with_capacity(5);

    if show_hashes {
        let width = a.chars().count().max(b.chars().count());
        lines.push(format!("{:width$}  {}", a, cmp.left, width = width));
        lines.push(format!("{:width$}  {}", b, cmp.right, width = width));
    }

    lines.push(format!("distance: {}", cmp.distance));
    lines.push(format!("hamming:  {}", cmp.hamming));
    lines.push(format!("similar:  {}", cmp.similar));

    lines.join("\n")
}

/// Compare two words and return formatted result
pub fn compare_and_format(a: &str, b: &str, show_hashes: bool) -> CommandResult {
    let cmp = Comparison::of(a, b);
    CommandResult::success(format_comparison(a, b, &cmp, show_hashes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hash() {
        let hash = Hash::new("java");
        assert_eq!(render_hash(hash, HashFormat::Hex), "0300000000004500");
        assert_eq!(render_hash(hash, HashFormat::Binary).len(), 64);
        assert_eq!(render_hash(Hash::default(), HashFormat::Hex), "0".repeat(16));
    }

    #[test]
    fn test_hash_words() {
        let result = hash_words(&["java", "jiva"], HashFormat::Hex);
        assert_eq!(result.output, "java\t0300000000004500\njiva\t0300000000004500");
    }

    #[test]
    fn test_comparison() {
        let cmp = Comparison::of("Jonny", "Jentny");
        assert_eq!(cmp.distance, 22);
        assert_eq!(cmp.hamming, 6);
        assert!(!cmp.similar);

        let cmp = Comparison::of("Jonny", "Johnny");
        assert_eq!(cmp.distance, 3);
        assert!(cmp.similar);
    }

    #[test]
    fn test_format_comparison() {
        let cmp = Comparison::of("nice", "mice");
        let output = format_comparison("nice", "mice", &cmp, false);
        assert_eq!(output, "distance: 34\nhamming:  1\nsimilar:  false");

        let output = format_comparison("nice", "mice", &cmp, true);
        assert_eq!(output.lines().count(), 5);
        assert!(output.starts_with("nice  "));
    }
}
