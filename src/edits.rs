//! Generation of strings one or two single-character edits away from a word.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// Letters of the English alphabet, the default edit alphabet.
pub const ENGLISH: &str = "abcdefghijklmnopqrstuvwxyz";

/// `Alphabet` is the set of letters used for replacements and insertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// `new` creates an alphabet from the characters of `letters`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlphabet`] if `letters` is empty or repeats a character.
    ///
    /// # Arguments
    ///
    /// * `letters` - The letters, each given once.
    pub fn new(letters: &str) -> Result<Self> {
        if letters.is_empty() {
            return Err(Error::InvalidAlphabet("no letters given".to_owned()));
        }
        let mut seen = HashSet::new();
        let mut chars = Vec::new();
        for c in letters.chars() {
            if !seen.insert(c) {
                return Err(Error::InvalidAlphabet(format!("letter {c:?} appears twice")));
            }
            chars.push(c);
        }
        Ok(Self { letters: chars })
    }

    /// `english` is the lowercase `a` to `z` alphabet.
    #[must_use]
    pub fn english() -> Self {
        Self {
            letters: ENGLISH.chars().collect(),
        }
    }

    /// `len` is the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// `is_empty` reports whether the alphabet has no letters, which `new` never allows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// `letters` returns the letters in the order they were given.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

/// `edits1` computes all strings exactly one edit away from `word`.
///
/// An edit deletes one character, transposes two adjacent characters,
/// replaces one character with a letter of `alphabet` or inserts a letter
/// of `alphabet` at any position. Edits work on `char`s, so non-ASCII input
/// is handled without splitting code points.
///
/// # Arguments
///
/// * `word` - A word.
/// * `alphabet` - Letters used for replacements and insertions.
///
/// # Example
///
/// ```
/// use spell_context::{edits1, Alphabet};
///
/// let edits = edits1("teh", &Alphabet::english());
/// assert!(edits.contains("the"));
/// assert!(edits.contains("te"));
/// assert!(edits.contains("tech"));
/// ```
#[must_use]
pub fn edits1(word: &str, alphabet: &Alphabet) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let letters = alphabet.letters();

    // chars[..i] + middle + chars[i + skip..]
    let splice = |i: usize, middle: &[char], skip: usize| -> String {
        chars[..i]
            .iter()
            .chain(middle)
            .chain(&chars[i + skip..])
            .collect()
    };

    let mut edits = HashSet::with_capacity((2 * letters.len() + 2) * (n + 1));
    for i in 0..=n {
        if i < n {
            edits.insert(splice(i, &[], 1));
            for &c in letters {
                edits.insert(splice(i, &[c], 1));
            }
        }
        if i + 1 < n {
            edits.insert(splice(i, &[chars[i + 1], chars[i]], 2));
        }
        for &c in letters {
            edits.insert(splice(i, &[c], 0));
        }
    }
    edits
}

/// `edits2` computes all strings reachable from `word` by two edits in sequence.
///
/// This is `edits1` applied to every element of `edits1(word)`, so the
/// result may also contain `word` itself and strings one edit away.
///
/// # Arguments
///
/// * `word` - A word.
/// * `alphabet` - Letters used for replacements and insertions.
#[must_use]
pub fn edits2(word: &str, alphabet: &Alphabet) -> HashSet<String> {
    edits1(word, alphabet)
        .iter()
        .flat_map(|e1| edits1(e1, alphabet))
        .collect()
}
