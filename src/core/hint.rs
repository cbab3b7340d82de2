//! Hint calculation and representation
//!
//! A hint encodes the feedback from a guess using base-3 encoding:
//! - 0 = absent (`b`)
//! - 1 = present but misplaced (`y`)
//! - 2 = correct position (`g`)
//!
//! Each position contributes digit × 3^position, so a hint for words of length
//! L is a value in `0..3^L`.

use super::word::MAX_WORD_LENGTH;
use crate::error::WordleError;
use serde::{Deserialize, Serialize};

/// Display character for an absent letter
pub const ABSENT: char = 'b';
/// Display character for a misplaced letter
pub const MISPLACED: char = 'y';
/// Display character for a correct letter
pub const CORRECT: char = 'g';

/// Feedback for one guess against one hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hint(u16);

impl Hint {
    /// Wrap a raw value without a range check; see [`HintCodec::checked_hint`]
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw base-3 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Encodes, decodes and computes hints for words of one fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintCodec {
    word_length: usize,
}

impl HintCodec {
    /// Create a codec for words of `word_length` letters
    ///
    /// # Errors
    /// Returns `WordleError::UnsupportedWordLength` unless `1 <= word_length <= 10`.
    pub fn new(word_length: usize) -> Result<Self, WordleError> {
        if word_length == 0 || word_length > MAX_WORD_LENGTH {
            return Err(WordleError::UnsupportedWordLength(word_length));
        }
        Ok(Self { word_length })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(self) -> usize {
        self.word_length
    }

    /// Number of distinct hints (3^L)
    #[inline]
    #[must_use]
    pub const fn num_hints(self) -> usize {
        3usize.pow(self.word_length as u32)
    }

    /// The hint produced when the guess is the hidden word
    #[inline]
    #[must_use]
    pub const fn all_correct(self) -> Hint {
        Hint((self.num_hints() - 1) as u16)
    }

    #[inline]
    #[must_use]
    pub const fn is_all_correct(self, hint: Hint) -> bool {
        hint.0 == self.all_correct().0
    }

    /// Calculate the hint when `guess` is played against the hidden `word`
    ///
    /// A letter is misplaced when it occurs at some other position of the word
    /// that the guess did not already match. Occurrences are not counted, so a
    /// repeated guess letter can be marked misplaced more often than it occurs.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategy::core::HintCodec;
    ///
    /// let codec = HintCodec::new(5).unwrap();
    /// let hint = codec.hint(b"aabbc", b"dbbba");
    /// assert_eq!(codec.decode(hint), "bbggy");
    /// ```
    #[must_use]
    pub fn hint(self, word: &[u8], guess: &[u8]) -> Hint {
        debug_assert_eq!(word.len(), self.word_length);
        debug_assert_eq!(guess.len(), self.word_length);

        let mut correct = [false; MAX_WORD_LENGTH];
        for (slot, (w, g)) in correct.iter_mut().zip(word.iter().zip(guess)) {
            *slot = w == g;
        }

        let mut value = 0u16;
        let mut weight = 1u16;
        for (i, &letter) in guess.iter().enumerate() {
            let digit = if correct[i] {
                2
            } else if word
                .iter()
                .enumerate()
                .any(|(j, &w)| j != i && !correct[j] && w == letter)
            {
                1
            } else {
                0
            };
            value += digit * weight;
            weight = weight.wrapping_mul(3);
        }

        Hint(value)
    }

    /// Hint with raw base-3 `value`, or `None` if it is not below 3^L
    #[must_use]
    pub const fn checked_hint(self, value: u16) -> Option<Hint> {
        if (value as usize) < self.num_hints() {
            Some(Hint(value))
        } else {
            None
        }
    }

    /// Per-position digits of a hint, first letter first
    pub fn digits(self, hint: Hint) -> impl Iterator<Item = u8> {
        debug_assert!(
            hint.index() < self.num_hints(),
            "hint {} out of range for length {}",
            hint.0,
            self.word_length
        );
        let mut value = hint.0;
        (0..self.word_length).map(move |_| {
            let digit = (value % 3) as u8;
            value /= 3;
            digit
        })
    }

    /// Render a hint with one of `b`, `y`, `g` per position
    #[must_use]
    pub fn decode(self, hint: Hint) -> String {
        self.digits(hint)
            .map(|digit| match digit {
                2 => CORRECT,
                1 => MISPLACED,
                _ => ABSENT,
            })
            .collect()
    }

    /// Parse a hint string such as `"bygbb"`
    ///
    /// # Errors
    /// Returns `WordleError::InvalidHint` if the string has the wrong length or
    /// contains a character other than `b`, `y`, `g`.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategy::core::HintCodec;
    ///
    /// let codec = HintCodec::new(5).unwrap();
    /// let hint = codec.encode("gyybb").unwrap();
    /// assert_eq!(codec.decode(hint), "gyybb");
    /// assert!(codec.encode("gyyb").is_err());
    /// ```
    pub fn encode(self, text: &str) -> Result<Hint, WordleError> {
        let invalid = || WordleError::InvalidHint {
            hint: text.to_string(),
            expected: self.word_length,
        };

        if text.chars().count() != self.word_length {
            return Err(invalid());
        }

        let mut value = 0u16;
        let mut weight = 1u16;
        for ch in text.chars() {
            let digit = match ch {
                CORRECT => 2,
                MISPLACED => 1,
                ABSENT => 0,
                _ => return Err(invalid()),
            };
            value += digit * weight;
            weight = weight.wrapping_mul(3);
        }

        Ok(Hint(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vocabulary::synthetic_words;

    fn codec() -> HintCodec {
        HintCodec::new(5).unwrap()
    }

    #[test]
    fn all_correct_constant() {
        let codec = codec();
        assert_eq!(codec.num_hints(), 243);
        // 2 + 2×3 + 2×9 + 2×27 + 2×81
        assert_eq!(codec.all_correct().value(), 242);
        assert_eq!(codec.decode(codec.all_correct()), "ggggg");
    }

    #[test]
    fn unsupported_lengths_rejected() {
        assert!(HintCodec::new(0).is_err());
        assert!(HintCodec::new(11).is_err());
        assert_eq!(HintCodec::new(10).unwrap().num_hints(), 59_049);
    }

    #[test]
    fn all_absent() {
        let codec = codec();
        let hint = codec.hint(b"aaaaa", b"bbbbb");
        assert_eq!(hint.value(), 0);
        assert_eq!(codec.decode(hint), "bbbbb");
    }

    #[test]
    fn greedy_matching_example() {
        let codec = codec();
        assert_eq!(codec.decode(codec.hint(b"aabbc", b"dbbba")), "bbggy");
        assert_eq!(codec.decode(codec.hint(b"abcde", b"acbfa")), "gyybb");
    }

    #[test]
    fn repeated_letters_are_not_counted() {
        // The word has a single 'a', yet every unmatched 'a' in the guess is misplaced
        let codec = codec();
        assert_eq!(codec.decode(codec.hint(b"axxxx", b"zaaaa")), "byyyy");
    }

    #[test]
    fn digit_weights_are_little_endian() {
        let codec = codec();
        // g at position 0, y at position 1: 2 + 1×3
        assert_eq!(codec.encode("gybbb").unwrap().value(), 5);
        assert_eq!(codec.encode("bbbbg").unwrap().value(), 162);
    }

    #[test]
    fn hint_properties_on_synthetic_vocabulary() {
        let codec = codec();
        let words = synthetic_words("abc", 5);
        assert_eq!(words.len(), 243);

        for word in &words {
            assert_eq!(
                codec.hint(word.as_bytes(), word.as_bytes()),
                codec.all_correct()
            );
            for guess in words.iter().step_by(7) {
                let decoded = codec.decode(codec.hint(word.as_bytes(), guess.as_bytes()));
                assert_eq!(decoded.len(), 5);
                assert!(decoded.chars().all(|c| matches!(c, 'b' | 'y' | 'g')));
            }
        }
    }

    #[test]
    fn round_trip_all_hints() {
        let codec = codec();
        for value in 0..codec.num_hints() as u16 {
            let hint = Hint::new(value);
            let text = codec.decode(hint);
            assert_eq!(codec.encode(&text).unwrap(), hint);
            assert_eq!(codec.decode(codec.encode(&text).unwrap()), text);
        }
    }

    #[test]
    fn encode_invalid() {
        let codec = codec();
        assert!(codec.encode("gyggyb").is_err()); // Too long
        assert!(codec.encode("gyg").is_err()); // Too short
        assert!(codec.encode("gxggy").is_err()); // Invalid char
        assert!(codec.encode("GYGGY").is_err()); // Uppercase is not canonical
        assert!(codec.encode("").is_err());
    }

    #[test]
    fn digits_follow_positions() {
        let codec = codec();
        let hint = codec.encode("gybgb").unwrap();
        assert_eq!(codec.digits(hint).collect::<Vec<_>>(), vec![2, 1, 0, 2, 0]);
    }

    #[test]
    fn checked_hint_rejects_values_past_all_correct() {
        let codec = codec();
        assert_eq!(codec.checked_hint(242), Some(codec.all_correct()));
        assert_eq!(codec.checked_hint(0).map(|h| codec.decode(h)).as_deref(), Some("bbbbb"));
        assert_eq!(codec.checked_hint(243), None);
        assert_eq!(HintCodec::new(1).unwrap().checked_hint(3), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "hint 243 out of range")]
    fn decode_rejects_out_of_range_hint() {
        let _ = codec().decode(Hint::new(243));
    }
}
