//! Distance metrics over phonetic hashes.
//!
//! Two hashes are compared through their XOR, the [`Difference`]. Two
//! reductions of that difference are available:
//!
//! - **Weighted distance**: the set bits of every byte are counted and scaled
//!   by [`WEIGHTS`]. Byte 7 holds the first character's phone and carries the
//!   largest weight, so a different leading sound dominates the score.
//! - **Hamming distance**: the plain number of differing bits.
//!
//! Both are symmetric, total and zero for identical hashes.

use std::fmt;

use crate::hash::Hash;

/// Per-byte weights, from the least significant byte (last retained phone)
/// to the most significant byte (first character).
pub const WEIGHTS: [u32; 8] = [1, 2, 3, 5, 8, 13, 21, 34];

/// Two words are similar when their weighted distance is below this value.
pub const SIMILARITY_THRESHOLD: u32 = 15;

/// The bitwise difference between two hashes.
///
/// Produced by subtracting one [`Hash`] from another:
///
/// ```rust
/// use libeudex::Hash;
///
/// let diff = Hash::new("jumpo") - Hash::new("jumbo");
/// assert_eq!(diff.dist(), 2);
/// assert!(diff.similar());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Difference {
    xor: u64,
}

impl Difference {
    /// Difference between two raw hash values.
    #[inline]
    pub const fn new(a: u64, b: u64) -> Self {
        Self { xor: a ^ b }
    }

    /// The raw XOR of the two hashes.
    #[inline]
    pub const fn xor(self) -> u64 {
        self.xor
    }

    /// Weighted distance.
    #[inline]
    pub fn dist(self) -> u32 {
        self.xor
            .to_le_bytes()
            .iter()
            .zip(WEIGHTS.iter())
            .map(|(byte, weight)| byte.count_ones() * weight)
            .sum()
    }

    /// Number of differing bits.
    #[inline]
    pub fn hamming(self) -> u32 {
        self.xor.count_ones()
    }

    /// Whether the weighted distance is below [`SIMILARITY_THRESHOLD`].
    #[inline]
    pub fn similar(self) -> bool {
        self.dist() < SIMILARITY_THRESHOLD
    }
}

impl fmt::Binary for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.xor, f)
    }
}

/// Weighted distance between two raw hashes.
#[inline]
pub fn distance(a: u64, b: u64) -> u32 {
    Difference::new(a, b).dist()
}

/// Hamming distance between two raw hashes.
#[inline]
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    Difference::new(a, b).hamming()
}

/// Hash both words and return their weighted distance.
///
/// # Example
///
/// ```rust
/// use libeudex::distance::string_distance;
///
/// assert_eq!(string_distance("Jonny", "Jenny"), 0);
/// assert!(string_distance("trump", "drumpf") < string_distance("gangam", "style"));
/// ```
#[inline]
pub fn string_distance(a: &str, b: &str) -> u32 {
    (Hash::new(a) - Hash::new(b)).dist()
}

/// Hash both words and return their Hamming distance.
#[inline]
pub fn string_hamming_distance(a: &str, b: &str) -> u32 {
    (Hash::new(a) - Hash::new(b)).hamming()
}

/// Whether two words sound alike.
///
/// ```rust
/// use libeudex::similar;
///
/// assert!(similar("maier", "meyer"));
/// assert!(!similar("no", "go"));
/// ```
#[inline]
pub fn similar(a: &str, b: &str) -> bool {
    string_distance(a, b) < SIMILARITY_THRESHOLD
}
