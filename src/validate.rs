//! Optional input validation.
//!
//! [`Hash::new`] accepts any string and silently skips characters that carry
//! no sound. Callers that would rather reject such input (for instance when
//! building an index from user-supplied names) can run words through
//! [`validate_word`] or [`checked_hash`] first. Validation never changes the
//! hash that is produced.

use thiserror::Error;
use tracing::trace;

use crate::hash::Hash;
use crate::phonetic::CharClass;

/// Errors reported by the validation layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The word is empty.
    #[error("Word is empty")]
    Empty,

    /// No character of the word maps to a phone, so it hashes to zero.
    #[error("Word '{0}' has no phonetic content")]
    NoPhoneticContent(String),

    /// A character outside the supported ranges, reported in strict mode.
    #[error("Unsupported character {ch:?} at position {position}")]
    UnsupportedChar {
        /// The offending character.
        ch: char,
        /// Character (not byte) offset within the word.
        position: usize,
    },
}

/// A specialized `Result` type for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// How picky validation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Reject only empty words and words without any phonetic content.
    #[default]
    Lenient,
    /// Additionally reject any unmapped character other than whitespace.
    Strict,
}

/// Check that a word is worth hashing.
///
/// ```rust
/// use libeudex::validate::{validate_word, Strictness, ValidationError};
///
/// assert!(validate_word("Müller", Strictness::Strict).is_ok());
/// assert!(validate_word("co-op", Strictness::Lenient).is_ok());
/// assert_eq!(
///     validate_word("co-op", Strictness::Strict),
///     Err(ValidationError::UnsupportedChar { ch: '-', position: 2 })
/// );
/// ```
pub fn validate_word(word: &str, strictness: Strictness) -> Result<()> {
    if word.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut mapped = false;
    for (position, ch) in word.chars().enumerate() {
        if CharClass::of(ch).is_mapped() {
            mapped = true;
        } else if strictness == Strictness::Strict && !ch.is_whitespace() {
            trace!(word, ?ch, position, "rejecting unsupported character");
            return Err(ValidationError::UnsupportedChar { ch, position });
        }
    }

    if !mapped {
        return Err(ValidationError::NoPhoneticContent(word.to_string()));
    }

    Ok(())
}

/// Validate a word, then hash it.
pub fn checked_hash(word: &str, strictness: Strictness) -> Result<Hash> {
    validate_word(word, strictness)?;
    Ok(Hash::new(word))
}
