//! Splitting raw text into lowercase word tokens.

use regex::Regex;

use crate::error::Result;

/// Word characters: ASCII letters, ASCII digits and underscore.
const WORD_PATTERN: &str = "[0-9A-Za-z_]+";

/// `Tokenizer` extracts maximal runs of word characters from text.
///
/// Any character outside `[0-9A-Za-z_]` is a delimiter and is dropped.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// `new` compiles the word pattern.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is rejected by `regex::Regex::new`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(WORD_PATTERN)?,
        })
    }

    /// `words` lazily yields the lowercase tokens of `text`, left to right.
    ///
    /// # Arguments
    ///
    /// * `text` - Arbitrary text, possibly empty.
    ///
    /// # Example
    ///
    /// ```
    /// use spell_context::Tokenizer;
    ///
    /// fn main() -> Result<(), spell_context::Error> {
    ///     let tokenizer = Tokenizer::new()?;
    ///     let words: Vec<String> = tokenizer.words("The fox's den, 2 km_away!").collect();
    ///     assert_eq!(words, ["the", "fox", "s", "den", "2", "km_away"]);
    ///     Ok(())
    /// }
    /// ```
    pub fn words<'t>(&'t self, text: &'t str) -> impl Iterator<Item = String> + 't {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        Tokenizer::new().unwrap().words(text).collect()
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens("  \n\t.,;!").is_empty());
    }

    #[test]
    fn folds_case_and_drops_punctuation() {
        assert_eq!(tokens("Hello, WORLD... hello"), ["hello", "world", "hello"]);
    }

    #[test]
    fn digits_and_underscores_are_word_characters() {
        assert_eq!(tokens("route_66 in 1926"), ["route_66", "in", "1926"]);
    }

    #[test]
    fn non_ascii_characters_delimit() {
        assert_eq!(tokens("café naïve"), ["caf", "na", "ve"]);
    }
}
