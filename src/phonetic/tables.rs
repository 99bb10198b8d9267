//! Phone lookup tables.
//!
//! The literal values are tuned by hand; distances between existing hashes
//! depend on every bit, so entries must not be rearranged or normalised.

use super::types::{CharClass, LETTERS, LETTERS_C1, UNKNOWN_PHONE};

/// The sound table.
///
/// Each bit describes a property of the phone:
///
/// | Position | Modifier | Property     | Phones                   |
/// |----------|---------:|--------------|:------------------------:|
/// | 1        | 1        | Discriminant | (for tagging duplicates) |
/// | 2        | 2        | Nasal        | mn                       |
/// | 3        | 4        | Fricative    | fvsjxzhct                |
/// | 4        | 8        | Plosive      | pbtdcgqk                 |
/// | 5        | 16       | Dental       | tdnzs                    |
/// | 6        | 32       | Liquid       | lr                       |
/// | 7        | 64       | Labial       | bfpv                     |
/// | 8        | 128      | Confident¹   | lrxzq                    |
///
/// ¹hard to misspell.
///
/// Vowels are represented by 0 and 1 (open and close) so that the XOR distance
/// between two vowels stays small.
pub const PHONES: [u8; LETTERS] = [
    0, // a
    //  +--------- Confident
    //  |+-------- Labial
    //  ||+------- Liquid
    //  |||+------ Dental
    //  ||||+----- Plosive
    //  |||||+---- Fricative
    //  ||||||+--- Nasal
    //  |||||||+-- Discriminant
    //  ||||||||
    0b01001000, // b
    0b00001100, // c
    0b00011000, // d
    0,          // e
    0b01000100, // f
    0b00001000, // g
    0b00000100, // h
    1,          // i
    0b00000101, // j
    0b00001001, // k
    0b10100000, // l
    0b00000010, // m
    0b00010010, // n
    0,          // o
    0b01001001, // p
    0b10101000, // q
    0b10100001, // r
    0b00010100, // s
    0b00011101, // t
    1,          // u
    0b01000101, // v
    0b00000000, // w
    0b10000100, // x
    1,          // y
    0b10010100, // z
];

/// Latin-1 phones, starting at `ß` (U+00DF).
///
/// These are approximations since their sound varies a lot between languages.
pub const PHONES_C1: [u8; LETTERS_C1] = [
    PHONES[(b's' - b'a') as usize] ^ 1, // ß
    0,                                  // à
    0,                                  // á
    0,                                  // â
    0,                                  // ã
    0,                                  // ä [æ]
    1,                                  // å [oː]
    0,                                  // æ [æ]
    PHONES[(b'z' - b'a') as usize] ^ 1, // ç [t͡ʃ]
    1,                                  // è
    1,                                  // é
    1,                                  // ê
    1,                                  // ë
    1,                                  // ì
    1,                                  // í
    1,                                  // î
    1,                                  // ï
    0b00010101,                         // ð [ð̠] (a non-plosive t)
    0b00010111,                         // ñ [nj] (n combined with j)
    0,                                  // ò
    0,                                  // ó
    0,                                  // ô
    0,                                  // õ
    1,                                  // ö [ø]
    UNKNOWN_PHONE,                      // ÷
    1,                                  // ø [ø]
    1,                                  // ù
    1,                                  // ú
    1,                                  // û
    1,                                  // ü
    1,                                  // ý
    0b00010101,                         // þ [ð̠] (a non-plosive t)
];

/// An _injective_ phone table, used for the first character of a word.
///
/// | Position | Modifier | Property (vowel)    | Property (consonant)                  |
/// |----------|---------:|---------------------|---------------------------------------|
/// | 1        | 1        | Discriminant        | (property 2 of `PHONES`) or discriminant |
/// | 2        | 2        | Is it open-mid?     | (property 3 of `PHONES`)              |
/// | 3        | 4        | Is it central?      | (property 4 of `PHONES`)              |
/// | 4        | 8        | Is it close-mid?    | (property 5 of `PHONES`)              |
/// | 5        | 16       | Is it front?        | (property 6 of `PHONES`)              |
/// | 6        | 32       | Is it close?        | (property 7 of `PHONES`)              |
/// | 7        | 64       | More close than [ɜ] | (property 8 of `PHONES`)              |
/// | 8        | 128      | Vowel?                                                      |
///
/// For consonants the low seven bits are a right-shifted [`PHONES`] entry, with
/// the lowest bit reused as discriminant.
pub const INJECTIVE_PHONES: [u8; LETTERS] = [
    //  +--------- Vowel
    //  |+-------- Closer than ɜ
    //  ||+------- Close
    //  |||+------ Front
    //  ||||+----- Close-mid
    //  |||||+---- Central
    //  ||||||+--- Open-mid
    //  |||||||+-- Discriminant
    //  ||||||||   (*=vowel)
    0b10000100, // a*
    0b00100100, // b
    0b00000110, // c
    0b00001100, // d
    0b11011000, // e*
    0b00100010, // f
    0b00000100, // g
    0b00000010, // h
    0b11111000, // i*
    0b00000011, // j
    0b00000101, // k
    0b01010000, // l
    0b00000001, // m
    0b00001001, // n
    0b10010100, // o*
    0b00100101, // p
    0b01010100, // q
    0b01010001, // r
    0b00001010, // s
    0b00001110, // t
    0b11100000, // u*
    0b00100011, // v
    0b00000000, // w
    0b01000010, // x
    0b11100100, // y*
    0b01001010, // z
];

/// Latin-1 injective phones, starting at `ß` (U+00DF).
pub const INJECTIVE_PHONES_C1: [u8; LETTERS_C1] = [
    INJECTIVE_PHONES[(b's' - b'a') as usize] ^ 1, // ß
    INJECTIVE_PHONES[(b'a' - b'a') as usize] ^ 1, // à
    INJECTIVE_PHONES[(b'a' - b'a') as usize] ^ 1, // á
    //  +--------- Vowel
    //  |+-------- Closer than ɜ
    //  ||+------- Close
    //  |||+------ Front
    //  ||||+----- Close-mid
    //  |||||+---- Central
    //  ||||||+--- Open-mid
    //  |||||||+-- Discriminant
    //  ||||||||
    0b10000000,                                   // â
    0b10000110,                                   // ã
    0b10100110,                                   // ä [æ]
    0b11000010,                                   // å [oː]
    0b10100111,                                   // æ [æ]
    0b01010100,                                   // ç [t͡ʃ]
    INJECTIVE_PHONES[(b'e' - b'a') as usize] ^ 1, // è
    INJECTIVE_PHONES[(b'e' - b'a') as usize] ^ 1, // é
    INJECTIVE_PHONES[(b'e' - b'a') as usize] ^ 1, // ê
    0b11000110,                                   // ë [ə] or [œ]
    INJECTIVE_PHONES[(b'i' - b'a') as usize] ^ 1, // ì
    INJECTIVE_PHONES[(b'i' - b'a') as usize] ^ 1, // í
    INJECTIVE_PHONES[(b'i' - b'a') as usize] ^ 1, // î
    INJECTIVE_PHONES[(b'i' - b'a') as usize] ^ 1, // ï
    0b00001011,                                   // ð [ð̠] (a non-plosive t)
    0b00001011,                                   // ñ [nj] (n combined with j)
    INJECTIVE_PHONES[(b'o' - b'a') as usize] ^ 1, // ò
    INJECTIVE_PHONES[(b'o' - b'a') as usize] ^ 1, // ó
    INJECTIVE_PHONES[(b'o' - b'a') as usize] ^ 1, // ô
    INJECTIVE_PHONES[(b'o' - b'a') as usize] ^ 1, // õ
    0b11011100,                                   // ö [œ] or [ø]
    UNKNOWN_PHONE,                                // ÷
    0b11011101,                                   // ø [œ] or [ø]
    INJECTIVE_PHONES[(b'u' - b'a') as usize] ^ 1, // ù
    INJECTIVE_PHONES[(b'u' - b'a') as usize] ^ 1, // ú
    INJECTIVE_PHONES[(b'u' - b'a') as usize] ^ 1, // û
    INJECTIVE_PHONES[(b'y' - b'a') as usize] ^ 1, // ü
    INJECTIVE_PHONES[(b'y' - b'a') as usize] ^ 1, // ý
    0b00001011,                                   // þ [ð̠] (a non-plosive t)
];

/// Entry of the phone tables for a character, or `None` outside both ranges.
#[inline]
pub fn phone(c: char) -> Option<u8> {
    match CharClass::of(c) {
        CharClass::Ascii(i) => Some(PHONES[i as usize]),
        CharClass::Accented(i) => Some(PHONES_C1[i as usize]),
        CharClass::Unmapped => None,
    }
}

/// Phone of a character after the first one.
///
/// Only ASCII letters are eligible here. Latin-1 letters are read through the
/// accented tables in first position only and are skipped everywhere else.
#[inline]
pub fn trailing_phone(c: char) -> Option<u8> {
    match CharClass::of(c) {
        CharClass::Ascii(i) => Some(PHONES[i as usize]),
        CharClass::Accented(_) | CharClass::Unmapped => None,
    }
}

/// Injective phone of the first character, or `None` if it carries no sound.
#[inline]
pub fn injective_phone(c: char) -> Option<u8> {
    match CharClass::of(c) {
        CharClass::Ascii(i) => Some(INJECTIVE_PHONES[i as usize]),
        CharClass::Accented(i) => Some(INJECTIVE_PHONES_C1[i as usize]),
        CharClass::Unmapped => None,
    }
}
