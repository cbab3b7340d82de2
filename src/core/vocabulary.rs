//! Solution and guess vocabularies
//!
//! Words and guesses live in separate index spaces. Every solution is also a
//! legal guess: solutions occupy the first guess indices, in order, followed by
//! the remaining guess-only words.

use super::hint::HintCodec;
use super::word::Word;
use crate::error::WordleError;
use log::warn;
use rustc_hash::{FxHashMap, FxHashSet, FxHasher};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Index of a candidate solution word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(u32);

/// Index of a legal guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessId(u32);

macro_rules! index_type {
    ($name:ident) => {
        impl $name {
            #[inline]
            #[must_use]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            #[must_use]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

index_type!(WordId);
index_type!(GuessId);

/// The fixed solution and guess lists for one game
#[derive(Debug, Clone)]
pub struct Vocabulary {
    codec: HintCodec,
    solutions: Vec<Word>,
    guesses: Vec<Word>,
    guess_lookup: FxHashMap<Box<str>, GuessId>,
}

impl Vocabulary {
    /// Validate and index a solution list and a guess list
    ///
    /// The word length is taken from the first solution. Guesses that repeat a
    /// solution are folded into the solution's index.
    ///
    /// # Errors
    /// Returns an error if the solution list is empty, a word has the wrong
    /// length or invalid characters, or a list contains duplicates.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategy::core::Vocabulary;
    ///
    /// let vocab = Vocabulary::new(&["aaaaa", "bbbbb"], &["bbbbb", "ddddd"]).unwrap();
    /// assert_eq!(vocab.num_words(), 2);
    /// assert_eq!(vocab.num_guesses(), 3);
    /// assert!(Vocabulary::new(&["aaaaa", "aaaaa"], &[] as &[&str]).is_err());
    /// ```
    pub fn new<S: AsRef<str>, T: AsRef<str>>(
        solutions: &[S],
        guesses: &[T],
    ) -> Result<Self, WordleError> {
        let first = solutions
            .first()
            .ok_or(WordleError::EmptyWordList("solution"))?;
        let codec = HintCodec::new(first.as_ref().trim().chars().count())?;
        let length = codec.word_length();

        let mut words = Vec::with_capacity(solutions.len() + guesses.len());
        let mut guess_lookup = FxHashMap::default();

        for text in solutions {
            let word = parse(text.as_ref(), length)?;
            let id = GuessId(words.len() as u32);
            if guess_lookup.insert(word.text().into(), id).is_some() {
                return Err(WordleError::DuplicateWord {
                    word: word.text().to_string(),
                    list: "solution",
                });
            }
            words.push(word);
        }

        let num_solutions = words.len();
        let mut seen_in_guesses = FxHashSet::default();
        let mut folded = 0usize;
        for text in guesses {
            let word = parse(text.as_ref(), length)?;
            if !seen_in_guesses.insert(word.text().to_string()) {
                return Err(WordleError::DuplicateWord {
                    word: word.text().to_string(),
                    list: "guess",
                });
            }
            if guess_lookup.contains_key(word.text()) {
                folded += 1;
                continue;
            }
            guess_lookup.insert(word.text().into(), GuessId(words.len() as u32));
            words.push(word);
        }

        if !guesses.is_empty() && folded < num_solutions {
            warn!(
                "{} solution words were missing from the guess list and were added to it",
                num_solutions - folded
            );
        }

        let solutions = words[..num_solutions].to_vec();

        Ok(Self {
            codec,
            solutions,
            guesses: words,
            guess_lookup,
        })
    }

    /// Every string of `length` letters over `alphabet`, used as both lists
    ///
    /// # Errors
    /// Returns an error if the alphabet is empty or contains non-letters, or
    /// the length is unsupported.
    pub fn synthetic(alphabet: &str, length: usize) -> Result<Self, WordleError> {
        let words = synthetic_words(alphabet, length);
        Self::new(&words, &[] as &[&str])
    }

    #[inline]
    #[must_use]
    pub const fn codec(&self) -> HintCodec {
        self.codec
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.codec.word_length()
    }

    #[inline]
    #[must_use]
    pub fn num_words(&self) -> usize {
        self.solutions.len()
    }

    #[inline]
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.solutions[id.index()]
    }

    #[inline]
    #[must_use]
    pub fn guess(&self, id: GuessId) -> &Word {
        &self.guesses[id.index()]
    }

    #[inline]
    #[must_use]
    pub fn word_text(&self, id: WordId) -> &str {
        self.solutions[id.index()].text()
    }

    #[inline]
    #[must_use]
    pub fn guess_text(&self, id: GuessId) -> &str {
        self.guesses[id.index()].text()
    }

    /// Look up a solution by text
    ///
    /// # Errors
    /// Returns `WordleError::UnknownWord` if `text` is not a solution.
    pub fn word_id(&self, text: &str) -> Result<WordId, WordleError> {
        self.guess_lookup
            .get(text.trim().to_lowercase().as_str())
            .and_then(|&id| self.word_of(id))
            .ok_or_else(|| WordleError::UnknownWord(text.to_string()))
    }

    /// Look up a guess by text
    ///
    /// # Errors
    /// Returns `WordleError::UnknownGuess` if `text` is not a legal guess.
    pub fn guess_id(&self, text: &str) -> Result<GuessId, WordleError> {
        self.guess_lookup
            .get(text.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| WordleError::UnknownGuess(text.to_string()))
    }

    /// The guess index of a solution word
    #[inline]
    #[must_use]
    pub const fn guess_of(&self, word: WordId) -> GuessId {
        GuessId(word.0)
    }

    /// The solution index of a guess, if the guess is a solution
    #[inline]
    #[must_use]
    pub fn word_of(&self, guess: GuessId) -> Option<WordId> {
        (guess.index() < self.solutions.len()).then_some(WordId(guess.0))
    }

    pub fn word_ids(&self) -> impl Iterator<Item = WordId> + use<> {
        (0..self.solutions.len() as u32).map(WordId)
    }

    pub fn guess_ids(&self) -> impl Iterator<Item = GuessId> + use<> {
        (0..self.guesses.len() as u32).map(GuessId)
    }

    /// Hash of the word length and both lists, used to validate cached tables
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.word_length().hash(&mut hasher);
        self.solutions.len().hash(&mut hasher);
        for word in &self.guesses {
            word.text().hash(&mut hasher);
        }
        hasher.finish()
    }
}

fn parse(text: &str, length: usize) -> Result<Word, WordleError> {
    Word::new(text, length).map_err(|source| WordleError::InvalidWord {
        word: text.to_string(),
        source,
    })
}

/// Every string of `length` letters over `alphabet`, in lexicographic order
///
/// # Examples
/// ```
/// use wordle_strategy::core::synthetic_words;
///
/// assert_eq!(synthetic_words("ab", 2), vec!["aa", "ab", "ba", "bb"]);
/// ```
#[must_use]
pub fn synthetic_words(alphabet: &str, length: usize) -> Vec<String> {
    let letters: Vec<char> = alphabet.chars().collect();
    let mut words = vec![String::new()];
    for _ in 0..length {
        words = words
            .iter()
            .flat_map(|prefix| {
                letters.iter().map(move |&c| {
                    let mut word = prefix.clone();
                    word.push(c);
                    word
                })
            })
            .collect();
    }
    words
}
