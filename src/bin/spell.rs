//! Command-line front end for the spelling corrector.
//!
//! Builds a model from a corpus file and corrects the words given as
//! arguments, or every word read from stdin when none are given.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spell_context::{best, Alphabet, CorrectorConfig, SpellingCorrector, Suggestion, Tokenizer, ENGLISH};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spell")]
#[command(about = "Correct misspelled words using corpus word and word-pair frequencies")]
#[command(version)]
struct Cli {
    /// Corpus file the vocabulary is built from
    #[arg(short, long)]
    corpus: PathBuf,

    /// Letters used to generate replacement and insertion edits
    #[arg(short, long, default_value = ENGLISH)]
    alphabet: String,

    /// Rank each word by how likely it is to follow the previous corrected word
    #[arg(long)]
    context: bool,

    /// Print every ranked candidate instead of only the best one
    #[arg(long)]
    candidates: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Words to correct (read from stdin when empty)
    words: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = CorrectorConfig {
        alphabet: Alphabet::new(&cli.alphabet).context("invalid --alphabet")?,
    };
    let sc = SpellingCorrector::from_file_with_config(&cli.corpus, config)
        .with_context(|| format!("failed to build model from {}", cli.corpus.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::new(&sc, cli.context, cli.candidates);

    if cli.words.is_empty() {
        let tokenizer = Tokenizer::new()?;
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            for word in tokenizer.words(&line) {
                session.correct(&word, &mut out)?;
            }
        }
    } else {
        for word in &cli.words {
            session.correct(word, &mut out)?;
        }
    }

    Ok(())
}

/// Corrects a stream of words, remembering the last correction for context mode.
struct Session<'a> {
    sc: &'a SpellingCorrector,
    context: bool,
    candidates: bool,
    previous: Option<String>,
}

impl<'a> Session<'a> {
    fn new(sc: &'a SpellingCorrector, context: bool, candidates: bool) -> Self {
        Self {
            sc,
            context,
            candidates,
            previous: None,
        }
    }

    fn correct(&mut self, word: &str, out: &mut impl Write) -> Result<()> {
        let ranked = match (&self.previous, self.context) {
            (Some(previous), true) => self.sc.suggestions_with_context(previous, word),
            _ => self.sc.suggestions(word),
        };
        let corrected = best(&ranked);

        if self.candidates {
            writeln!(out, "{word}:")?;
            for suggestion in &ranked {
                write_suggestion(out, suggestion)?;
            }
        } else {
            writeln!(out, "{word} -> {corrected}")?;
        }

        if !corrected.is_empty() {
            self.previous = Some(corrected);
        }
        Ok(())
    }
}

fn write_suggestion(out: &mut impl Write, s: &Suggestion) -> io::Result<()> {
    match s.context_probability {
        Some(p) => writeln!(
            out,
            "  {}\tp={:.6e}\tp_ctx={:.6}\td={}",
            s.word, s.probability, p, s.distance
        ),
        None => writeln!(out, "  {}\tp={:.6e}\td={}", s.word, s.probability, s.distance),
    }
}
