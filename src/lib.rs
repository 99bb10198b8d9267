//! # libeudex
//!
//! Phonetic fingerprints for fuzzy word matching.
//!
//! Every word is folded into a 64-bit [`Hash`] made of up to eight phones,
//! 8-bit descriptors of how a letter sounds (nasal, plosive, labial, vowel
//! height and so on). Words that sound alike get hashes that differ in few
//! bits, and the differences in the leading sound are weighted heaviest.
//! That makes the hashes useful for deduplication, fuzzy matching and
//! "did you mean" suggestions against a word list.
//!
//! ASCII letters are understood anywhere in a word; the Latin-1 letters
//! `ß..=þ` only as its first character. Everything
//! else (digits, punctuation, other scripts) is ignored.
//!
//! ## Example
//!
//! ```rust
//! use libeudex::prelude::*;
//!
//! assert_eq!(Hash::new("Jonny"), Hash::new("Jenny"));
//! assert!(similar("maier", "meyer"));
//! assert!(!similar("horse", "norse"));
//!
//! let diff = Hash::new("trump") - Hash::new("drumpf");
//! assert!(diff.dist() < string_distance("gangam", "style"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;
pub mod distance;
pub mod hash;
pub mod phonetic;
pub mod validate;

/// Interactive REPL for comparing words
#[cfg(feature = "cli")]
pub mod repl;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use distance::{
    distance, hamming_distance, similar, string_distance, string_hamming_distance, Difference,
    SIMILARITY_THRESHOLD, WEIGHTS,
};
pub use hash::{hash, Hash};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{
        distance, hamming_distance, similar, string_distance, string_hamming_distance,
        Difference, SIMILARITY_THRESHOLD,
    };
    pub use crate::hash::{hash, Hash};
    pub use crate::validate::{checked_hash, validate_word, Strictness, ValidationError};
}
