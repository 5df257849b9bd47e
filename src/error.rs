//! Errors raised while building a correction model.

use std::path::PathBuf;

/// `Error` enumerates the ways model initialization can fail.
///
/// Correcting a word never fails: unknown words fall back to the input and
/// empty input is returned as is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The corpus file could not be read.
    #[error("corpus unavailable at {}", path.display())]
    CorpusUnavailable {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The corpus contained no word tokens.
    #[error("corpus contains no words")]
    EmptyCorpus,

    /// The tokenizer pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// The alphabet used for edit generation is unusable.
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
}

/// `Result` is a shorthand for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
