//! Word lists for Wordle solving
//!
//! Loads solution and guess lists from disk and turns them into a
//! [`Vocabulary`].

mod loader;

pub use loader::{load_word_list, parse_word_list};

use crate::core::Vocabulary;
use crate::error::WordleError;
use log::info;
use std::path::Path;

/// Build a vocabulary from a solution list and an optional guess list
///
/// Without a guess list, the solutions are the only legal guesses.
///
/// # Errors
/// Returns an error if a file cannot be read or its words are invalid.
pub fn load_vocabulary(solutions: &Path, guesses: Option<&Path>) -> Result<Vocabulary, WordleError> {
    let solution_words = load_word_list(solutions)?;
    let guess_words = match guesses {
        Some(path) => load_word_list(path)?,
        None => Vec::new(),
    };

    let vocab = Vocabulary::new(&solution_words, &guess_words)?;
    info!(
        "Vocabulary: {} solutions, {} guesses, {} letters",
        vocab.num_words(),
        vocab.num_guesses(),
        vocab.word_length()
    );
    Ok(vocab)
}
