//! Context-aware spelling corrector in Rust.
//! The implementation is based on [Peter Norvig's essay](http://norvig.com/spell-correct.html),
//! extended with a bigram model that ranks candidates by the word they follow.
//!
//! A [`SpellingCorrector`] is built once from a corpus and is then read-only,
//! so a single instance can serve corrections from many threads.
//!
//! ```
//! use spell_context::SpellingCorrector;
//!
//! fn main() -> Result<(), spell_context::Error> {
//!     let sc = SpellingCorrector::from_corpus("I love cats. I love cats. I live here.")?;
//!     assert_eq!(sc.correct("lvoe"), "love");
//!     assert_eq!(sc.correct_with_context("love", "kats"), "cats");
//!     Ok(())
//! }
//! ```

#![warn(clippy::all, clippy::pedantic, missing_docs)]

mod corrector;
mod distance;
mod edits;
mod error;
mod model;
mod tokenize;

pub use corrector::{best, CorrectorConfig, SpellingCorrector, Suggestion};
pub use distance::distance;
pub use edits::{edits1, edits2, Alphabet, ENGLISH};
pub use error::{Error, Result};
pub use model::{BigramTable, FrequencyTable};
pub use tokenize::Tokenizer;
