//! Phone tables and character classification.
//!
//! A phone is one letter's sound, encoded as an 8-bit feature descriptor.
//! Two tables exist for each character range:
//!
//! - [`PHONES`] for every character after the first ([`trailing_phone`]);
//!   Latin-1 letters after the first character are skipped like punctuation
//! - [`INJECTIVE_PHONES`] / [`INJECTIVE_PHONES_C1`] for the first character,
//!   which keeps vowel quality and consonant features apart more faithfully
//!   because it ends up in the heaviest-weighted byte of the hash
//!
//! The `_C1` tables cover the Latin-1 block `ß..=þ` (U+00DF to U+00FE).
//! [`phone`] exposes both plain tables for inspection.
//!
//! # Usage
//!
//! ```rust
//! use libeudex::phonetic::{phone, injective_phone, trailing_phone, CharClass};
//!
//! assert_eq!(phone('m'), Some(0b00000010));
//! assert_eq!(injective_phone('M'), Some(0b00000001));
//! assert_eq!(phone('!'), None);
//! assert_eq!(trailing_phone('ñ'), None);
//! assert_eq!(CharClass::of('Ö'), CharClass::of('ö'));
//! ```

pub mod tables;
pub mod types;

pub use tables::{
    injective_phone, phone, trailing_phone, INJECTIVE_PHONES, INJECTIVE_PHONES_C1, PHONES, PHONES_C1,
};
pub use types::{fold_case, CharClass, FEATURE_MASK, UNKNOWN_PHONE};
