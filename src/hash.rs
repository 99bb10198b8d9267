//! The phonetic hash.
//!
//! A [`Hash`] packs up to eight phones into a `u64`:
//!
//! ```text
//!  byte 7        byte 6 ... byte 0
//! +-------------+---------------------------------+
//! | first phone | up to 7 phones, oldest highest  |
//! | (injective) | unused high slots are zero      |
//! +-------------+---------------------------------+
//! ```
//!
//! After the first character only ASCII letters count; everything else,
//! Latin-1 letters included, is skipped. A phone whose
//! features (all bits but the discriminant) match the previously retained one
//! is dropped. This collapses runs such as `"riiiindom"` and `"ryyyyyndom"`
//! onto the same hash.

use std::fmt;
use std::ops::Sub;

use crate::distance::Difference;
use crate::phonetic::{injective_phone, trailing_phone, FEATURE_MASK};

/// Number of phones stored after the first character.
pub const MAX_PHONES: usize = 7;

/// A phonetic fingerprint of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Hash {
    hash: u64,
}

impl Hash {
    /// Phonetically hash a word.
    ///
    /// ```rust
    /// use libeudex::Hash;
    ///
    /// assert_eq!(Hash::new("triggered"), Hash::new("TRIGGERED"));
    /// assert_eq!(Hash::new("comp@u#te?r"), Hash::new("computer"));
    /// assert_eq!(Hash::new("").raw(), 0);
    /// ```
    pub fn new(word: &str) -> Self {
        let mut chars = word.chars();

        let first = match chars.next() {
            Some(c) => injective_phone(c).unwrap_or(0),
            None => return Self::default(),
        };

        let mut res: u64 = 0;
        let mut retained = 0;

        for x in chars.filter_map(trailing_phone) {
            if retained == MAX_PHONES {
                break;
            }

            // The accumulator's low byte is the last retained phone (or 0).
            if (res as u8) & FEATURE_MASK != x & FEATURE_MASK {
                res = (res << 8) | u64::from(x);
                retained += 1;
            }
        }

        Self {
            hash: res | (u64::from(first) << 56),
        }
    }

    /// Wrap a previously computed hash value.
    #[inline]
    pub const fn from_raw(hash: u64) -> Self {
        Self { hash }
    }

    /// The packed 64-bit value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.hash
    }

    /// Injective phone of the first character (the most significant byte).
    #[inline]
    pub const fn first_phone(self) -> u8 {
        (self.hash >> 56) as u8
    }

    /// The seven phone slots after the first character, oldest first.
    ///
    /// Phones are right-aligned, so unused slots lead as zeros.
    pub fn phones(self) -> [u8; MAX_PHONES] {
        let mut phones = [0; MAX_PHONES];
        phones.copy_from_slice(&self.hash.to_be_bytes()[1..]);
        phones
    }

    /// Weighted distance to another hash.
    #[inline]
    pub fn dist(self, other: Hash) -> u32 {
        (self - other).dist()
    }

    /// Hamming distance to another hash.
    #[inline]
    pub fn hamming(self, other: Hash) -> u32 {
        (self - other).hamming()
    }

    /// Whether the two hashes sound alike.
    #[inline]
    pub fn similar(self, other: Hash) -> bool {
        (self - other).similar()
    }
}

/// Phonetically hash a word.
#[inline]
pub fn hash(word: &str) -> Hash {
    Hash::new(word)
}

impl From<&str> for Hash {
    fn from(word: &str) -> Self {
        Hash::new(word)
    }
}

impl From<Hash> for u64 {
    fn from(hash: Hash) -> Self {
        hash.hash
    }
}

impl Sub for Hash {
    type Output = Difference;

    #[inline]
    fn sub(self, rhs: Hash) -> Difference {
        Difference::new(self.hash, rhs.hash)
    }
}

/// Renders the hash as 64 binary digits, most significant bit first.
impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064b}", self.hash)
    }
}

impl fmt::Binary for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.hash, f)
    }
}

impl fmt::LowerHex for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.hash, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word() {
        assert_eq!(Hash::new("").raw(), 0);
        assert_eq!(Hash::new("").to_string(), "0".repeat(64));
    }

    #[test]
    fn test_known_hashes() {
        assert_eq!(Hash::new("java").raw(), 0x0300_0000_0000_4500);
        assert_eq!(Hash::new("computer").raw(), 0x0600_0249_011d_00a1);
        assert_eq!(Hash::new("Jeff Buckley").raw(), 0x0344_4801_0c09_a000);
        assert_eq!(Hash::new("Tim Buckley").raw(), 0x0e02_4801_0c09_a000);
    }

    #[test]
    fn test_single_character() {
        assert_eq!(Hash::new("a").raw(), 0x84u64 << 56);
        assert_eq!(Hash::new("B").raw(), 0x24u64 << 56);
        assert_eq!(Hash::new("ß").raw(), 0x0bu64 << 56);
    }

    #[test]
    fn test_unmapped_first_character_still_occupies_first_slot() {
        // '÷' is mapped to the unknown marker, '4' to nothing
        assert_eq!(Hash::new("÷x").raw(), 0xff00_0000_0000_0084);
        assert_eq!(Hash::new("4chan").first_phone(), 0);
        assert_ne!(Hash::new("4chan"), Hash::new("chan"));
    }

    #[test]
    fn test_accented_first_character() {
        assert_eq!(Hash::new("Ölf").raw(), 0xdc00_0000_0000_a044);
        assert_eq!(Hash::new("Ölf"), Hash::new("ölf"));
    }

    #[test]
    fn test_accented_letters_after_first_are_skipped() {
        assert_eq!(Hash::new("mañana"), Hash::new("maana"));
        assert_eq!(Hash::new("mañana").raw(), 0x0100_0000_0000_1200);
        assert_eq!(Hash::new("façade"), Hash::new("faade"));
        assert_eq!(Hash::new("façade").raw(), 0x2200_0000_0000_1800);
        assert_eq!(Hash::new("Straße"), Hash::new("Strae"));
    }

    #[test]
    fn test_phones_keep_zero_phones() {
        // "java" retains v then the open vowel a, which is a zero phone
        assert_eq!(Hash::new("java").phones(), [0, 0, 0, 0, 0, 0x45, 0]);
        let hash = Hash::new("computer");
        let mut bytes = [0; 8];
        bytes[0] = hash.first_phone();
        bytes[1..].copy_from_slice(&hash.phones());
        assert_eq!(u64::from_be_bytes(bytes), hash.raw());
    }

    #[test]
    fn test_dedup_compares_against_last_retained_phone() {
        // b, c, b: the third phone matches the first but not its predecessor
        assert_eq!(Hash::new("xbcb").phones(), [0, 0, 0, 0, 0x48, 0x0c, 0x48]);
        assert_eq!(Hash::new("xbb").phones(), [0, 0, 0, 0, 0, 0, 0x48]);
        // r (0xa1) and l (0xa0) differ only in the discriminant
        assert_eq!(Hash::new("xrl"), Hash::new("xr"));
    }

    #[test]
    fn test_leading_vowel_after_first_is_dropped() {
        // The empty accumulator has a zero low byte, matching open vowels
        assert_eq!(Hash::new("jiva"), Hash::new("java"));
        assert_eq!(Hash::new("jiva").raw(), 0x0300_0000_0000_4500);
    }

    #[test]
    fn test_at_most_seven_phones() {
        let hash = Hash::new("xbcbcbcbcbcbc");
        assert!(hash.phones().iter().all(|&p| p != 0));
        assert_eq!(hash.first_phone(), 0x42);
        assert_eq!(hash, Hash::new("xbcbcbcb"));
        assert_ne!(hash, Hash::new("xbcbcbc"));
    }

    #[test]
    fn test_noise_is_ignored() {
        let computer = Hash::new("computer");
        for noisy in ["co!mputer", "comp-uter", "comp@u#te?r", "com pu ter", "c0mputer1"] {
            assert_eq!(Hash::new(noisy), computer, "{}", noisy);
        }
    }

    #[test]
    fn test_display_is_64_binary_digits() {
        let rendered = Hash::new("java").to_string();
        assert_eq!(rendered.len(), 64);
        assert!(rendered.starts_with("00000011"));
        assert!(rendered.ends_with("0100010100000000"));
        assert_eq!(format!("{:x}", Hash::new("java")), "300000000004500");
    }

    #[test]
    fn test_raw_round_trip() {
        let hash = Hash::new("meyer");
        assert_eq!(Hash::from_raw(hash.raw()), hash);
        assert_eq!(u64::from(hash), hash.raw());
        assert_eq!(Hash::from("meyer"), hash);
    }

    #[test]
    fn test_hash_methods_match_free_functions() {
        let a = Hash::new("lizzard");
        let b = Hash::new("wizzard");
        assert_eq!(a.dist(b), crate::distance::distance(a.raw(), b.raw()));
        assert_eq!(a.hamming(b), crate::distance::hamming_distance(a.raw(), b.raw()));
        assert_eq!(a.similar(b), crate::distance::similar("lizzard", "wizzard"));
    }
}
