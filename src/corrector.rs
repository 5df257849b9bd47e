//! Candidate selection and ranking.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, trace};

use crate::distance::distance;
use crate::edits::{edits1, Alphabet};
use crate::error::{Error, Result};
use crate::model::{BigramTable, FrequencyTable};
use crate::tokenize::Tokenizer;

/// `CorrectorConfig` holds the settings used when building a [`SpellingCorrector`].
#[derive(Debug, Clone, Default)]
pub struct CorrectorConfig {
    /// Letters used to generate replacement and insertion edits.
    pub alphabet: Alphabet,
}

/// `Suggestion` is a ranked candidate correction together with its scores.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// The candidate word.
    pub word: String,
    /// Unigram probability of `word`.
    pub probability: f64,
    /// Probability of `word` given the previous word, for context-aware ranking.
    pub context_probability: Option<f64>,
    /// Levenshtein distance from the input word.
    pub distance: usize,
}

/// `SpellingCorrector` is a frequency model built from a corpus that
/// corrects words against the corpus vocabulary.
///
/// The model is immutable once built and can be shared across threads.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    alphabet: Alphabet,
    unigrams: FrequencyTable,
    bigrams: BigramTable,
}

impl SpellingCorrector {
    /// `from_corpus` builds a corrector over the words of `text` with an English alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCorpus`] if `text` contains no words.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_context::SpellingCorrector;
    ///
    /// fn main() -> Result<(), spell_context::Error> {
    ///     let sc = SpellingCorrector::from_corpus("the quick brown fox jumps over the lazy dog")?;
    ///     assert_eq!(sc.correct("teh"), "the");
    ///     assert_eq!(sc.correct("quikc"), "quick");
    ///     Ok(())
    /// }
    /// ```
    pub fn from_corpus(text: &str) -> Result<Self> {
        Self::with_config(text, CorrectorConfig::default())
    }

    /// `with_config` builds a corrector over the words of `text` using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCorpus`] if `text` contains no words, or
    /// [`Error::Pattern`] if the tokenizer cannot be built.
    pub fn with_config(text: &str, config: CorrectorConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new()?;
        let tokens: Vec<String> = tokenizer.words(text).collect();
        if tokens.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let unigrams = FrequencyTable::build(&tokens);
        let bigrams = BigramTable::build(&tokens);
        info!(
            tokens = unigrams.total(),
            vocabulary = unigrams.len(),
            bigrams = bigrams.len(),
            "built correction model"
        );

        Ok(Self {
            alphabet: config.alphabet,
            unigrams,
            bigrams,
        })
    }

    /// `from_file` builds a corrector from the corpus stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorpusUnavailable`] if the file cannot be read and
    /// [`Error::EmptyCorpus`] if it contains no words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with_config(path, CorrectorConfig::default())
    }

    /// `from_file_with_config` is [`SpellingCorrector::from_file`] with a custom configuration.
    ///
    /// # Errors
    ///
    /// See [`SpellingCorrector::from_file`].
    pub fn from_file_with_config(path: impl AsRef<Path>, config: CorrectorConfig) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::CorpusUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read corpus");
        Self::with_config(&text, config)
    }

    /// `frequencies` exposes the unigram table.
    #[must_use]
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.unigrams
    }

    /// `bigrams` exposes the adjacent-pair table.
    #[must_use]
    pub fn bigrams(&self) -> &BigramTable {
        &self.bigrams
    }

    /// `alphabet` returns the letters used for edits.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// `contains` reports whether `word` is a known word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.unigrams.contains(word)
    }

    /// `probability` computes the unigram probability of `word`.
    #[must_use]
    pub fn probability(&self, word: &str) -> f64 {
        self.unigrams.probability(word)
    }

    /// `conditional_probability` computes the probability of `word` following `previous`.
    #[must_use]
    pub fn conditional_probability(&self, previous: &str, word: &str) -> f64 {
        self.bigrams.conditional_probability(&self.unigrams, previous, word)
    }

    /// `known` computes the subset of `words` that appear in the vocabulary.
    ///
    /// # Arguments
    ///
    /// * `words` - Words to filter.
    pub fn known<S: AsRef<str>>(&self, words: impl IntoIterator<Item = S>) -> HashSet<String> {
        words
            .into_iter()
            .filter(|word| self.unigrams.contains(word.as_ref()))
            .map(|word| word.as_ref().to_owned())
            .collect()
    }

    /// `candidates` generates possible spelling corrections for `word`.
    ///
    /// Tries, in order, `word` itself, the known words one edit away and the
    /// known words two edits away, returning the first non-empty tier. When
    /// none is known, returns `word` unchanged. The result is never empty.
    ///
    /// # Arguments
    ///
    /// * `word` - A lowercase word.
    #[must_use]
    pub fn candidates(&self, word: &str) -> HashSet<String> {
        if word.is_empty() || self.unigrams.contains(word) {
            return HashSet::from([word.to_owned()]);
        }

        let e1 = edits1(word, &self.alphabet);
        let k1 = self.known(&e1);
        if !k1.is_empty() {
            debug!(word, candidates = k1.len(), "one edit away");
            return k1;
        }

        let k2: HashSet<String> = e1
            .iter()
            .flat_map(|e| edits1(e, &self.alphabet))
            .filter(|e2| self.unigrams.contains(e2))
            .collect();
        if !k2.is_empty() {
            debug!(word, candidates = k2.len(), "two edits away");
            return k2;
        }

        debug!(word, "no known word within two edits");
        HashSet::from([word.to_owned()])
    }

    /// `suggestions` ranks every candidate for `word`, best first.
    ///
    /// Candidates are ordered by unigram probability, then by edit distance
    /// to `word`, then alphabetically. When no known word is within two
    /// edits the single suggestion is `word` exactly as given.
    ///
    /// # Arguments
    ///
    /// * `word` - A word; its ASCII letters are lowercased for lookup.
    #[must_use]
    pub fn suggestions(&self, word: &str) -> Vec<Suggestion> {
        let folded = word.to_ascii_lowercase();
        let mut ranked: Vec<Suggestion> = self
            .candidates(&folded)
            .into_iter()
            .map(|candidate| self.suggestion(word, &folded, candidate, None))
            .collect();
        ranked.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then(a.distance.cmp(&b.distance))
                .then_with(|| a.word.cmp(&b.word))
        });
        trace!(?ranked);
        ranked
    }

    /// `suggestions_with_context` ranks every candidate for `word` following `previous`.
    ///
    /// Candidates are ordered by the probability of following `previous`,
    /// then by unigram probability, then alphabetically. Edit distance is
    /// reported but does not take part in the ordering.
    ///
    /// # Arguments
    ///
    /// * `previous` - The word preceding `word`; its ASCII letters are lowercased.
    /// * `word` - A word; its ASCII letters are lowercased for lookup.
    #[must_use]
    pub fn suggestions_with_context(&self, previous: &str, word: &str) -> Vec<Suggestion> {
        let previous = previous.to_ascii_lowercase();
        let folded = word.to_ascii_lowercase();
        let mut ranked: Vec<Suggestion> = self
            .candidates(&folded)
            .into_iter()
            .map(|candidate| self.suggestion(word, &folded, candidate, Some(&previous)))
            .collect();
        ranked.sort_by(|a, b| {
            context_order(b, a)
                .then(b.probability.total_cmp(&a.probability))
                .then_with(|| a.word.cmp(&b.word))
        });
        trace!(previous = %previous, ?ranked);
        ranked
    }

    fn suggestion(&self, input: &str, folded: &str, candidate: String, previous: Option<&str>) -> Suggestion {
        let probability = self.probability(&candidate);
        let context_probability = previous.map(|previous| self.conditional_probability(previous, &candidate));
        let distance = distance(folded, &candidate);
        // unknown candidates only come from the fallback tier
        let word = if self.unigrams.contains(&candidate) {
            candidate
        } else {
            input.to_owned()
        };
        Suggestion {
            word,
            probability,
            context_probability,
            distance,
        }
    }

    /// `correct` computes the most probable spelling correction for `word`.
    ///
    /// Known words are returned unchanged, empty input yields an empty
    /// string and words with no known word within two edits are returned
    /// exactly as given.
    ///
    /// # Arguments
    ///
    /// * `word` - A word.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_context::SpellingCorrector;
    ///
    /// fn main() -> Result<(), spell_context::Error> {
    ///     let sc = SpellingCorrector::from_corpus("spelling is hard, spelling is fun")?;
    ///     assert_eq!(sc.correct("speling"), "spelling");
    ///     assert_eq!(sc.correct("fun"), "fun");
    ///     assert_eq!(sc.correct("Qwxyzk"), "Qwxyzk");
    ///     assert_eq!(sc.correct(""), "");
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn correct(&self, word: &str) -> String {
        best(&self.suggestions(word))
    }

    /// `correct_with_context` computes the most probable correction for
    /// `word` when it directly follows `previous`.
    ///
    /// # Arguments
    ///
    /// * `previous` - The preceding word.
    /// * `word` - A word.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_context::SpellingCorrector;
    ///
    /// fn main() -> Result<(), spell_context::Error> {
    ///     let sc = SpellingCorrector::from_corpus("a big cat. a bug. a bug. the bag")?;
    ///     assert_eq!(sc.correct("bxg"), "bug");
    ///     assert_eq!(sc.correct_with_context("the", "bxg"), "bag");
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn correct_with_context(&self, previous: &str, word: &str) -> String {
        best(&self.suggestions_with_context(previous, word))
    }
}

fn context_order(a: &Suggestion, b: &Suggestion) -> Ordering {
    a.context_probability
        .unwrap_or(0.0)
        .total_cmp(&b.context_probability.unwrap_or(0.0))
}

/// `best` returns the word of the top-ranked suggestion.
///
/// Rankings from [`SpellingCorrector`] always hold at least one suggestion;
/// an empty slice yields an empty string.
#[must_use]
pub fn best(ranked: &[Suggestion]) -> String {
    ranked
        .first()
        .map(|suggestion| suggestion.word.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = "The cat sat on the mat. The cats sat. The cats ran. A hat.";

    fn corrector() -> SpellingCorrector {
        SpellingCorrector::from_corpus(CORPUS).unwrap()
    }

    #[test]
    fn empty_corpus_is_rejected() {
        assert!(matches!(
            SpellingCorrector::from_corpus(" ... !!"),
            Err(Error::EmptyCorpus)
        ));
    }

    #[test]
    fn missing_file_is_corpus_unavailable() {
        let err = SpellingCorrector::from_file("/nonexistent/corpus.txt").unwrap_err();
        assert!(matches!(err, Error::CorpusUnavailable { .. }));
    }

    #[test]
    fn known_filters_to_vocabulary() {
        let sc = corrector();
        let known = sc.known(["cat", "dog", "mat", "cow"]);
        assert_eq!(known, HashSet::from(["cat".to_owned(), "mat".to_owned()]));
    }

    #[test]
    fn known_word_is_its_only_candidate() {
        assert_eq!(corrector().candidates("cat"), HashSet::from(["cat".to_owned()]));
    }

    #[test]
    fn candidates_stop_at_first_tier() {
        let sc = corrector();
        // "at" is unknown; "cat", "sat", "mat", "hat" are one edit away
        let candidates = sc.candidates("at");
        assert!(candidates.contains("cat"));
        assert!(candidates.contains("hat"));
        // "cats" is two edits away and must not appear
        assert!(!candidates.contains("cats"));
    }

    #[test]
    fn candidates_escalate_to_two_edits() {
        let sc = corrector();
        let candidates = sc.candidates("rxm");
        assert_eq!(candidates, HashSet::from(["ran".to_owned()]));
    }

    #[test]
    fn unknown_far_word_falls_back_to_input() {
        let sc = corrector();
        assert_eq!(sc.candidates("zzzzzzzz"), HashSet::from(["zzzzzzzz".to_owned()]));
        assert_eq!(sc.correct("zzzzzzzz"), "zzzzzzzz");
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let sc = corrector();
        assert_eq!(sc.correct(""), "");
        assert_eq!(sc.correct_with_context("the", ""), "");
    }

    #[test]
    fn prefers_more_frequent_candidate() {
        // "the" x4 beats every other word one edit from "tha"
        assert_eq!(corrector().correct("tha"), "the");
    }

    #[test]
    fn equal_probability_breaks_on_distance_then_alphabet() {
        let sc = SpellingCorrector::from_corpus("abc abd").unwrap();
        // "ab" -> both one insertion away, equally frequent
        assert_eq!(sc.correct("ab"), "abc");
        let ranked = sc.suggestions("ab");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].distance, 1);
    }

    #[test]
    fn input_is_lowercased_for_lookup() {
        assert_eq!(corrector().correct("CAT"), "cat");
        assert_eq!(corrector().correct_with_context("THE", "Rat"), "cat");
    }

    #[test]
    fn fallback_keeps_input_case() {
        let sc = corrector();
        let ranked = sc.suggestions("ZzZzZzZz");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, "ZzZzZzZz");
        assert_eq!(ranked[0].distance, 0);
        assert_eq!(best(&ranked), "ZzZzZzZz");
        assert_eq!(best(&[]), "");
        // folding is ASCII-only, matching the tokenizer
        assert_eq!(sc.correct("ÉÉÉÉÉÉÉÉ"), "ÉÉÉÉÉÉÉÉ");
    }

    #[test]
    fn context_ranking_uses_bigrams_first() {
        let sc = corrector();
        // "sat" is the most frequent word one edit from "rat"
        assert_eq!(sc.correct("rat"), "sat");
        // but only "cat" and "mat" ever follow "the"
        assert_eq!(sc.correct_with_context("the", "rat"), "cat");
        let ranked = sc.suggestions_with_context("the", "rat");
        assert!((ranked[0].context_probability.unwrap_or_default() - 0.25).abs() < 1e-12);
        assert_eq!(ranked[1].word, "mat");
    }

    #[test]
    fn unknown_previous_word_falls_back_to_unigrams() {
        let sc = corrector();
        assert_eq!(sc.correct_with_context("zebra", "tha"), sc.correct("tha"));
    }

    #[test]
    fn custom_alphabet_limits_edits() {
        let config = CorrectorConfig {
            alphabet: Alphabet::new("xyz").unwrap(),
        };
        let sc = SpellingCorrector::with_config("cat cat dog", config).unwrap();
        // inserting 'a' is not possible with this alphabet
        assert_eq!(sc.correct("ct"), "ct");
        // deletions do not depend on the alphabet
        assert_eq!(sc.correct("caat"), "cat");
    }
}
