//! Unigram and bigram frequency tables built from a token sequence.

use std::collections::HashMap;

/// `FrequencyTable` maps every word of a corpus to its occurrence count.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
    total: u64,
}

impl FrequencyTable {
    /// `build` counts each token once per occurrence.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens produced by the tokenizer.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_context::FrequencyTable;
    ///
    /// let table = FrequencyTable::build(["the", "cat", "the"]);
    /// assert_eq!(table.count("the"), 2);
    /// assert_eq!(table.total(), 3);
    /// assert!((table.probability("cat") - 1.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn build<S: AsRef<str>>(tokens: impl IntoIterator<Item = S>) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut total = 0_u64;
        for token in tokens {
            let token = token.as_ref();
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_owned(), 1);
                }
            }
            total += 1;
        }
        Self { counts, total }
    }

    /// `count` returns the occurrences of `word`, zero when unknown.
    #[must_use]
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// `contains` reports whether `word` is in the vocabulary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// `total` is the number of tokens the table was built from.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `len` is the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `is_empty` reports whether the vocabulary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `probability` computes `count(word) / total`.
    ///
    /// Unknown words have probability zero. An empty table uses a total of
    /// one so the division is always defined.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn probability(&self, word: &str) -> f64 {
        f64::from(self.count(word)) / self.total.max(1) as f64
    }

    /// `iter` visits every `(word, count)` entry in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

/// `BigramTable` counts adjacent token pairs.
///
/// Counts are keyed by the first word, then by its successor, so lookups
/// by borrowed strings need no allocation.
#[derive(Debug, Clone, Default)]
pub struct BigramTable {
    pairs: HashMap<String, HashMap<String, u32>>,
    len: usize,
}

impl BigramTable {
    /// `build` counts every token paired with its immediate successor.
    ///
    /// The last token has no successor and contributes no pair.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens produced by the tokenizer, in corpus order.
    pub fn build<S: AsRef<str>>(tokens: impl IntoIterator<Item = S>) -> Self {
        let mut table = Self::default();
        let mut previous: Option<S> = None;
        for token in tokens {
            if let Some(prev) = previous.take() {
                table.insert(prev.as_ref(), token.as_ref());
            }
            previous = Some(token);
        }
        table
    }

    fn insert(&mut self, first: &str, second: &str) {
        let followers = self.pairs.entry(first.to_owned()).or_default();
        match followers.get_mut(second) {
            Some(count) => *count += 1,
            None => {
                followers.insert(second.to_owned(), 1);
                self.len += 1;
            }
        }
    }

    /// `count` returns how often `second` directly followed `first`.
    #[must_use]
    pub fn count(&self, first: &str, second: &str) -> u32 {
        self.pairs
            .get(first)
            .and_then(|followers| followers.get(second))
            .copied()
            .unwrap_or(0)
    }

    /// `followers` visits every word seen right after `first`, with its count.
    pub fn followers<'a>(&'a self, first: &str) -> impl Iterator<Item = (&'a str, u32)> + 'a {
        self.pairs
            .get(first)
            .into_iter()
            .flat_map(|followers| followers.iter().map(|(word, &count)| (word.as_str(), count)))
    }

    /// `len` is the number of distinct pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `is_empty` reports whether no pair was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `conditional_probability` estimates `P(second | first)` by maximum likelihood.
    ///
    /// Returns `count(first, second) / unigrams.count(first)`, or zero when
    /// `first` is not in `unigrams`. Unseen pairs score exactly zero.
    ///
    /// # Arguments
    ///
    /// * `unigrams` - Frequency table built from the same tokens.
    /// * `first` - The preceding word.
    /// * `second` - The word being scored.
    #[must_use]
    pub fn conditional_probability(&self, unigrams: &FrequencyTable, first: &str, second: &str) -> f64 {
        match unigrams.count(first) {
            0 => 0.0,
            n => f64::from(self.count(first, second)) / f64::from(n),
        }
    }
}
