//! The (guess, hint) → words table
//!
//! For every guess the index stores the hint each solution produces, plus one
//! dense bit-row per hint that actually occurs. Narrowing a candidate set is a
//! single row intersection.

use crate::core::{CandidateSet, DenseSet, GuessId, Hint, HintCodec, Vocabulary, WordId, WordSet};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

/// Rows of one guess, sorted by hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct GuessRows {
    pub(crate) hints: Vec<Hint>,
    pub(crate) sets: Vec<DenseSet>,
}

impl GuessRows {
    fn row(&self, hint: Hint) -> Option<&DenseSet> {
        self.hints
            .binary_search(&hint)
            .ok()
            .map(|slot| &self.sets[slot])
    }
}

/// Table of words compatible with each (guess, hint) outcome
///
/// # Examples
/// ```
/// use wordle_strategy::core::{Vocabulary, WordSet};
/// use wordle_strategy::index::CompatibilityIndex;
///
/// let vocab = Vocabulary::synthetic("abc", 5).unwrap();
/// let index = CompatibilityIndex::build(&vocab);
///
/// let guess = vocab.guess_id("aaabc").unwrap();
/// let hint = vocab.codec().encode("gggyy").unwrap();
/// let remaining = index.compatible(guess, hint, &index.all_words());
///
/// let words: Vec<_> = remaining.iter().map(|w| vocab.word(w).text()).collect();
/// assert_eq!(words, vec!["aaacb"]);
/// ```
#[derive(Debug, Clone)]
pub struct CompatibilityIndex {
    codec: HintCodec,
    num_words: usize,
    fingerprint: u64,
    hints: Vec<Hint>,
    rows: Vec<GuessRows>,
}

impl CompatibilityIndex {
    /// Compute every guess's rows in parallel
    #[must_use]
    pub fn build(vocab: &Vocabulary) -> Self {
        let start = Instant::now();
        let codec = vocab.codec();
        let num_words = vocab.num_words();

        let per_guess: Vec<(Vec<Hint>, GuessRows)> = vocab
            .guesses()
            .par_iter()
            .map(|guess| {
                let hints: Vec<Hint> = vocab
                    .solutions()
                    .iter()
                    .map(|word| codec.hint(word.bytes(), guess.bytes()))
                    .collect();

                let mut by_hint: BTreeMap<Hint, DenseSet> = BTreeMap::new();
                for (i, &hint) in hints.iter().enumerate() {
                    by_hint
                        .entry(hint)
                        .or_insert_with(|| DenseSet::empty(num_words))
                        .insert(WordId::new(i as u32));
                }
                let (row_hints, sets) = by_hint.into_iter().unzip();

                (
                    hints,
                    GuessRows {
                        hints: row_hints,
                        sets,
                    },
                )
            })
            .collect();

        let mut hints = Vec::with_capacity(num_words * per_guess.len());
        let mut rows = Vec::with_capacity(per_guess.len());
        for (guess_hints, guess_rows) in per_guess {
            hints.extend(guess_hints);
            rows.push(guess_rows);
        }

        let index = Self {
            codec,
            num_words,
            fingerprint: vocab.fingerprint(),
            hints,
            rows,
        };
        info!(
            "Built compatibility index: {} guesses x {} words, {} rows in {:.2?}",
            index.num_guesses(),
            num_words,
            index.row_count(),
            start.elapsed()
        );
        index
    }

    /// Reassemble an index from stored rows, rebuilding the hint table
    ///
    /// Returns `None` unless every guess assigns each word to exactly one row.
    pub(crate) fn from_rows(
        codec: HintCodec,
        num_words: usize,
        fingerprint: u64,
        rows: Vec<GuessRows>,
    ) -> Option<Self> {
        let mut hints = vec![Hint::new(0); num_words * rows.len()];
        for (g, guess_rows) in rows.iter().enumerate() {
            if guess_rows.hints.len() != guess_rows.sets.len()
                || !guess_rows.hints.is_sorted_by(|a, b| a < b)
            {
                return None;
            }
            let mut assigned = 0;
            for (&hint, set) in guess_rows.hints.iter().zip(&guess_rows.sets) {
                if set.universe() != num_words || hint.index() >= codec.num_hints() {
                    return None;
                }
                for word in set.iter() {
                    hints[g * num_words + word.index()] = hint;
                    assigned += 1;
                }
            }
            if assigned != num_words {
                return None;
            }
        }

        Some(Self {
            codec,
            num_words,
            fingerprint,
            hints,
            rows,
        })
    }

    #[inline]
    #[must_use]
    pub const fn codec(&self) -> HintCodec {
        self.codec
    }

    #[inline]
    #[must_use]
    pub const fn num_words(&self) -> usize {
        self.num_words
    }

    #[inline]
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.rows.len()
    }

    /// Fingerprint of the vocabulary the index was built from
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Total number of non-empty (guess, hint) rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.iter().map(|r| r.hints.len()).sum()
    }

    pub(crate) fn rows(&self) -> &[GuessRows] {
        &self.rows
    }

    /// The guess index of a solution word; solutions occupy the first guess indices
    #[inline]
    #[must_use]
    pub const fn guess_of(&self, word: WordId) -> GuessId {
        GuessId::new(word.index() as u32)
    }

    /// Every solution word
    #[must_use]
    pub fn all_words(&self) -> CandidateSet {
        CandidateSet::all(self.num_words)
    }

    /// Precomputed hint for `guess` played against hidden `word`
    #[inline]
    #[must_use]
    pub fn hint(&self, word: WordId, guess: GuessId) -> Hint {
        self.hints[guess.index() * self.num_words + word.index()]
    }

    /// Words producing `hint` for `guess`, or `None` if no word does
    #[must_use]
    pub fn row(&self, guess: GuessId, hint: Hint) -> Option<&DenseSet> {
        self.rows[guess.index()].row(hint)
    }

    /// Candidates consistent with seeing `hint` after playing `guess`
    ///
    /// The result keeps the representation of `candidates`.
    #[must_use]
    pub fn compatible(&self, guess: GuessId, hint: Hint, candidates: &CandidateSet) -> CandidateSet {
        match (self.row(guess, hint), candidates) {
            (Some(row), _) => candidates.intersect_row(row),
            (None, CandidateSet::Dense(_)) => CandidateSet::Dense(DenseSet::empty(self.num_words)),
            (None, CandidateSet::Sparse(_)) => CandidateSet::empty(self.num_words),
        }
    }

    /// Size of [`compatible`](Self::compatible) without building the set
    #[must_use]
    pub fn count_compatible(&self, guess: GuessId, hint: Hint, candidates: &CandidateSet) -> usize {
        self.row(guess, hint)
            .map_or(0, |row| candidates.count_in_row(row))
    }

    /// Group candidates by the hint `guess` produces, sorted by hint
    #[must_use]
    pub fn partition(&self, guess: GuessId, candidates: &CandidateSet) -> Vec<(Hint, usize)> {
        let mut counts: FxHashMap<Hint, usize> = FxHashMap::default();
        for word in candidates.iter() {
            *counts.entry(self.hint(word, guess)).or_insert(0) += 1;
        }
        let mut classes: Vec<(Hint, usize)> = counts.into_iter().collect();
        classes.sort_unstable_by_key(|&(hint, _)| hint);
        classes
    }

    /// Drop `word` from the row of `(guess, hint)`, leaving the hint table alone
    #[cfg(test)]
    pub(crate) fn forget_in_row(&mut self, guess: GuessId, hint: Hint, word: WordId) {
        let rows = &mut self.rows[guess.index()];
        if let Ok(slot) = rows.hints.binary_search(&hint) {
            let set = &rows.sets[slot];
            let kept = DenseSet::from_words(set.universe(), set.iter().filter(|&w| w != word));
            rows.sets[slot] = kept;
        }
    }
}
