//! Character classification and phone feature bits.
//!
//! Every character of a word falls into exactly one [`CharClass`]:
//!
//! - `Ascii(i)` - an ASCII letter, `i` is its offset from `'a'` after case folding
//! - `Accented(i)` - a Latin-1 letter between `ß` and `þ`, `i` is its offset from `ß`
//! - `Unmapped` - anything else (digits, punctuation, whitespace, other scripts)
//!
//! Case folding is explicit: `A..=Z` map onto `a..=z`, and the Latin-1 uppercase
//! block `À..=Þ` maps onto `à..=þ`. `×` (U+00D7) sits inside that block but is
//! not a letter, so it is left alone and classifies as `Unmapped`.

/// Number of entries in the ASCII phone tables.
pub const LETTERS: usize = 26;

/// Number of entries in the Latin-1 phone tables (`ß` through `þ`).
pub const LETTERS_C1: usize = 32;

/// First code point of the Latin-1 phone tables (`ß`).
pub const C1_START: u32 = 0xDF;

/// Last code point of the Latin-1 phone tables (`þ`).
pub const C1_END: u32 = 0xFE;

/// Bit 0: breaks ties between otherwise identical phones.
pub const DISCRIMINANT: u8 = 1 << 0;
/// Bit 1: nasal (`m`, `n`).
pub const NASAL: u8 = 1 << 1;
/// Bit 2: fricative (`f`, `v`, `s`, `j`, `x`, `z`, `h`, `c`, `t`).
pub const FRICATIVE: u8 = 1 << 2;
/// Bit 3: plosive (`p`, `b`, `t`, `d`, `c`, `g`, `q`, `k`).
pub const PLOSIVE: u8 = 1 << 3;
/// Bit 4: dental (`t`, `d`, `n`, `z`, `s`).
pub const DENTAL: u8 = 1 << 4;
/// Bit 5: liquid (`l`, `r`).
pub const LIQUID: u8 = 1 << 5;
/// Bit 6: labial (`b`, `f`, `p`, `v`).
pub const LABIAL: u8 = 1 << 6;
/// Bit 7: confident, i.e. hard to misspell (`l`, `r`, `x`, `z`, `q`).
pub const CONFIDENT: u8 = 1 << 7;

/// Bits compared when deciding whether a phone repeats the previous one.
pub const FEATURE_MASK: u8 = !DISCRIMINANT;

/// Marker used for `÷` in the Latin-1 tables.
pub const UNKNOWN_PHONE: u8 = u8::MAX;

/// Phonetic class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter, stored as its offset from `'a'`.
    Ascii(u8),
    /// Latin-1 letter in `ß..=þ`, stored as its offset from `ß`.
    Accented(u8),
    /// Carries no phonetic content.
    Unmapped,
}

impl CharClass {
    /// Classify a character, folding case first.
    #[inline]
    pub fn of(c: char) -> Self {
        let folded = fold_case(c) as u32;

        if (u32::from(b'a')..=u32::from(b'z')).contains(&folded) {
            CharClass::Ascii((folded - u32::from(b'a')) as u8)
        } else if (C1_START..=C1_END).contains(&folded) {
            CharClass::Accented((folded - C1_START) as u8)
        } else {
            CharClass::Unmapped
        }
    }

    /// Returns true if the character contributes to a hash.
    #[inline]
    pub fn is_mapped(self) -> bool {
        !matches!(self, CharClass::Unmapped)
    }
}

/// Fold ASCII and Latin-1 uppercase letters to lowercase.
///
/// Characters outside those two blocks are returned unchanged.
#[inline]
pub fn fold_case(c: char) -> char {
    match c {
        'A'..='Z' => c.to_ascii_lowercase(),
        // À..=Þ without ×
        '\u{C0}'..='\u{DE}' if c != '\u{D7}' => {
            char::from_u32(c as u32 + 0x20).unwrap_or(c)
        }
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_letters() {
        assert_eq!(CharClass::of('a'), CharClass::Ascii(0));
        assert_eq!(CharClass::of('z'), CharClass::Ascii(25));
        assert_eq!(CharClass::of('Q'), CharClass::Ascii(16));
    }

    #[test]
    fn test_accented_letters() {
        assert_eq!(CharClass::of('ß'), CharClass::Accented(0));
        assert_eq!(CharClass::of('þ'), CharClass::Accented(31));
        assert_eq!(CharClass::of('÷'), CharClass::Accented(24));
        // Uppercase Latin-1 folds onto the lowercase block
        assert_eq!(CharClass::of('Ö'), CharClass::of('ö'));
        assert_eq!(CharClass::of('À'), CharClass::Accented(1));
        assert_eq!(CharClass::of('Þ'), CharClass::Accented(31));
    }

    #[test]
    fn test_unmapped() {
        for c in ['0', '9', ' ', '-', '@', '\n', '×', 'ÿ', 'µ', 'Ā', '日', '😀'] {
            assert_eq!(CharClass::of(c), CharClass::Unmapped, "{:?}", c);
            assert!(!CharClass::of(c).is_mapped());
        }
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case('A'), 'a');
        assert_eq!(fold_case('a'), 'a');
        assert_eq!(fold_case('É'), 'é');
        assert_eq!(fold_case('×'), '×');
        assert_eq!(fold_case('ß'), 'ß');
        assert_eq!(fold_case('1'), '1');
    }

    #[test]
    fn test_feature_bits_are_disjoint() {
        let bits = [
            DISCRIMINANT,
            NASAL,
            FRICATIVE,
            PLOSIVE,
            DENTAL,
            LIQUID,
            LABIAL,
            CONFIDENT,
        ];
        assert_eq!(bits.iter().fold(0u8, |acc, b| acc | b), u8::MAX);
        assert_eq!(bits.iter().map(|b| b.count_ones()).sum::<u32>(), 8);
    }
}
