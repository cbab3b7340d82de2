//! Error types shared across the crate
//!
//! Boundary errors (malformed words, hint strings, word lists and cache files) are
//! reported as [`WordleError`]. The search itself only fails through
//! [`SearchError`], which signals a broken invariant rather than an exhausted budget.

use crate::core::{GuessId, Hint, WordError};
use thiserror::Error;

/// Errors raised while validating external input
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("duplicate word '{word}' in {list} list")]
    DuplicateWord { word: String, list: &'static str },

    #[error("{0} list is empty")]
    EmptyWordList(&'static str),

    #[error("word length {0} is not supported (expected 1..={max})", max = crate::core::MAX_WORD_LENGTH)]
    UnsupportedWordLength(usize),

    #[error("invalid hint '{hint}': expected {expected} characters from 'b', 'y', 'g'")]
    InvalidHint { hint: String, expected: usize },

    #[error("'{0}' is not in the guess list")]
    UnknownGuess(String),

    #[error("'{0}' is not in the solution list")]
    UnknownWord(String),

    #[error("cached compatibility index does not match the loaded vocabulary")]
    IndexMismatch,

    #[error("cache format error: {0}")]
    Cache(String),

    #[error("word list format error: {0}")]
    WordList(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Fatal failures of the strategy search
///
/// Budget exhaustion is never an error; it is returned as
/// [`Strategy::Poisoned`](crate::solver::Strategy::Poisoned).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(
        "guess {guess} with hint {hint:?} leaves {found} compatible words but the hint table predicts {expected}"
    )]
    InvariantViolation {
        guess: GuessId,
        hint: Hint,
        expected: usize,
        found: usize,
    },
}
