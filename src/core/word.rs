//! Vocabulary word representation
//!
//! A Word stores a validated, lowercase ASCII string of a fixed length.

use std::fmt;
use thiserror::Error;

/// Longest supported word; 3^10 hints still fit in a `u16`.
pub const MAX_WORD_LENGTH: usize = 10;

/// A validated vocabulary word
///
/// Stores the lowercase text and its bytes for hint calculation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Box<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word of the given length from a string
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_strategy::core::Word;
    ///
    /// let word = Word::new("Crane", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: &str, length: usize) -> Result<Self, WordError> {
        let text = text.trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                found: text.len(),
            });
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.into_boxed_str(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE", 5).unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("  CrAnE\n", 5).unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("abc", 3).unwrap().text(), "abc");
        assert_eq!(Word::new("abcdefghij", 10).unwrap().len(), 10);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("toolong", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                found: 7
            })
        );
        assert_eq!(
            Word::new("shrt", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                found: 4
            })
        );
        assert!(matches!(
            Word::new("", 5),
            Err(WordError::InvalidLength { found: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané", 5), Err(WordError::NonAscii));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane", 5).unwrap();
        let word2 = Word::new("CRANE", 5).unwrap();
        let word3 = Word::new("slate", 5).unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
