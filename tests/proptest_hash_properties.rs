//! Property-based tests for the phonetic hash and its distances.
//!
//! These tests verify:
//!
//! 1. **Identity**: d(x, x) = 0
//! 2. **Symmetry**: d(x, y) = d(y, x)
//! 3. **Indiscernibles**: d(x, y) = 0 ⟺ hash(x) = hash(y)
//! 4. **Case folding**: hash(x) = hash(uppercase(x))
//! 5. **Noise**: characters without sound never change the hash
//! 6. **Runs**: doubling a letter after the first never changes the hash
//! 7. **Latin-1**: accented letters only count in first position

use libeudex::phonetic::injective_phone;
use libeudex::prelude::*;
use proptest::prelude::*;

fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,20}").unwrap()
}

fn arb_nonempty_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,20}").unwrap()
}

fn arb_latin1_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zà-þ]{0,16}").unwrap()
}

fn arb_noise() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9 !?#@'.,-]{1,5}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..20).prop_map(|chars| chars.into_iter().collect())
}

// ============================================================================
// Distance Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn distance_identity(a in arb_unicode_string()) {
        prop_assert_eq!(string_distance(&a, &a), 0);
        prop_assert_eq!(string_hamming_distance(&a, &a), 0);
        prop_assert!(similar(&a, &a));
    }

    #[test]
    fn distance_symmetric(a in arb_latin1_word(), b in arb_latin1_word()) {
        prop_assert_eq!(string_distance(&a, &b), string_distance(&b, &a));
        prop_assert_eq!(string_hamming_distance(&a, &b), string_hamming_distance(&b, &a));
    }

    #[test]
    fn distance_zero_iff_equal_hashes(a in arb_word(), b in arb_word()) {
        let (ha, hb) = (Hash::new(&a), Hash::new(&b));
        prop_assert_eq!(ha.dist(hb) == 0, ha == hb);
        prop_assert_eq!(ha.hamming(hb) == 0, ha == hb);
    }

    #[test]
    fn weighted_distance_dominates_hamming(a in any::<u64>(), b in any::<u64>()) {
        prop_assert!(distance(a, b) >= hamming_distance(a, b));
        prop_assert!(hamming_distance(a, b) <= 64);
    }

    #[test]
    fn similar_matches_threshold(a in arb_word(), b in arb_word()) {
        prop_assert_eq!(similar(&a, &b), string_distance(&a, &b) < SIMILARITY_THRESHOLD);
    }
}

// ============================================================================
// Hash Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn hash_ignores_ascii_case(a in arb_word()) {
        prop_assert_eq!(Hash::new(&a), Hash::new(&a.to_ascii_uppercase()));
    }

    #[test]
    fn hash_ignores_noise_after_first_char(
        word in arb_nonempty_word(),
        noise in arb_noise(),
        at in any::<prop::sample::Index>(),
    ) {
        let split = 1 + at.index(word.len());
        let noisy = format!("{}{}{}", &word[..split], noise, &word[split..]);
        prop_assert_eq!(Hash::new(&noisy), Hash::new(&word));
    }

    #[test]
    fn hash_ignores_doubled_letters(
        word in arb_nonempty_word(),
        at in any::<prop::sample::Index>(),
    ) {
        prop_assume!(word.len() > 1);
        let i = 1 + at.index(word.len() - 1);
        let doubled = format!("{}{}", &word[..=i], &word[i..]);
        prop_assert_eq!(Hash::new(&doubled), Hash::new(&word));
    }

    #[test]
    fn first_phone_is_injective_phone_of_first_char(word in arb_nonempty_word()) {
        let first = word.chars().next().unwrap();
        prop_assert_eq!(Some(Hash::new(&word).first_phone()), injective_phone(first));
    }

    #[test]
    fn phones_and_first_phone_rebuild_the_hash(word in arb_latin1_word()) {
        let hash = Hash::new(&word);
        let mut bytes = [0u8; 8];
        bytes[0] = hash.first_phone();
        bytes[1..].copy_from_slice(&hash.phones());
        prop_assert_eq!(u64::from_be_bytes(bytes), hash.raw());
    }

    #[test]
    fn latin1_letters_after_first_char_are_ignored(
        word in arb_nonempty_word(),
        accented in prop::string::string_regex("[ß-þ]{1,4}").unwrap(),
        at in any::<prop::sample::Index>(),
    ) {
        let split = 1 + at.index(word.len());
        let mixed = format!("{}{}{}", &word[..split], accented, &word[split..]);
        prop_assert_eq!(Hash::new(&mixed), Hash::new(&word));
    }

    #[test]
    fn hash_never_panics(s in arb_unicode_string()) {
        let _ = Hash::new(&s);
    }
}
