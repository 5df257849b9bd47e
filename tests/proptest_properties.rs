//! Property-based tests for edit distance, edit generation and candidate selection.

use proptest::prelude::*;
use spell_context::{distance, edits1, Alphabet, SpellingCorrector};

const CORPUS: &str = "the quick brown fox jumps over the lazy dog while the cat \
    sleeps on the warm mat and the dog barks at the moon every night";

fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,8}").unwrap()
}

fn arb_short_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{0,5}").unwrap()
}

fn arb_unicode_word() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..8).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn distance_identity(a in arb_unicode_word()) {
        prop_assert_eq!(distance(&a, &a), 0);
    }

    #[test]
    fn distance_symmetric(a in arb_unicode_word(), b in arb_unicode_word()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn distance_triangle_inequality(a in arb_word(), b in arb_word(), c in arb_word()) {
        let d_ab = distance(&a, &b);
        let d_ac = distance(&a, &c);
        let d_cb = distance(&c, &b);
        prop_assert!(d_ab <= d_ac + d_cb, "d({a}, {b}) = {d_ab} > {d_ac} + {d_cb}");
    }

    #[test]
    fn distance_bounded_by_longer_length(a in arb_word(), b in arb_word()) {
        prop_assert!(distance(&a, &b) <= a.len().max(b.len()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn edits1_within_size_bound(word in arb_word()) {
        let len = word.chars().count();
        let bound = len + len.saturating_sub(1) + 26 * len + 26 * (len + 1);
        prop_assert!(edits1(&word, &Alphabet::english()).len() <= bound);
    }

    #[test]
    fn edits1_stay_within_two_of_word(word in arb_word()) {
        // a transposition is two Levenshtein operations
        for edit in edits1(&word, &Alphabet::english()) {
            prop_assert!(distance(&word, &edit) <= 2);
        }
    }

    #[test]
    fn known_is_subset_of_input_and_vocabulary(words in prop::collection::vec(arb_word(), 0..20)) {
        let sc = SpellingCorrector::from_corpus(CORPUS).unwrap();
        for word in sc.known(&words) {
            prop_assert!(words.contains(&word));
            prop_assert!(sc.contains(&word));
        }
    }

    #[test]
    fn candidates_never_empty(word in arb_short_word()) {
        let sc = SpellingCorrector::from_corpus(CORPUS).unwrap();
        prop_assert!(!sc.candidates(&word).is_empty());
    }

    #[test]
    fn corrections_are_known_or_input(word in arb_short_word(), previous in arb_short_word()) {
        let sc = SpellingCorrector::from_corpus(CORPUS).unwrap();
        let corrected = sc.correct(&word);
        prop_assert!(corrected == word || sc.contains(&corrected));
        let corrected = sc.correct_with_context(&previous, &word);
        prop_assert!(corrected == word || sc.contains(&corrected));
    }
}

#[test]
fn every_vocabulary_word_corrects_to_itself() {
    let sc = SpellingCorrector::from_corpus(CORPUS).unwrap();
    for (word, _) in sc.frequencies().iter() {
        assert_eq!(sc.correct(word), word);
        assert_eq!(sc.correct_with_context("the", word), word);
    }
}
