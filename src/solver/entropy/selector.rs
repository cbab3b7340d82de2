//! Information-gain guess selection
//!
//! Picks the guess that maximizes expected information gain. Ties go to the
//! lower guess index so that serial and parallel selection agree.

use super::calculator::InformationScorer;
use crate::core::{CandidateSet, GuessId};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Higher gain first, then lower guess index
fn rank(a: &(GuessId, f64), b: &(GuessId, f64)) -> Ordering {
    a.1.total_cmp(&b.1).then_with(|| b.0.cmp(&a.0))
}

impl InformationScorer<'_> {
    /// Select the guess with the highest expected information gain
    ///
    /// Returns the guess and its gain, or `None` if `guesses` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategy::core::Vocabulary;
    /// use wordle_strategy::index::CompatibilityIndex;
    /// use wordle_strategy::solver::InformationMode;
    /// use wordle_strategy::solver::entropy::InformationScorer;
    ///
    /// let vocab = Vocabulary::new(&["aaaaa", "bbbbb", "ccccc"], &["abcdd"]).unwrap();
    /// let index = CompatibilityIndex::build(&vocab);
    /// let scorer = InformationScorer::new(&index, InformationMode::Exact);
    ///
    /// let guesses: Vec<_> = vocab.guess_ids().collect();
    /// let (best, gain) = scorer.best_guess(&guesses, &index.all_words()).unwrap();
    /// assert_eq!(vocab.guess(best).text(), "abcdd"); // separates all three words
    /// assert!(gain > 1.5);
    /// ```
    #[must_use]
    pub fn best_guess(
        &self,
        guesses: &[GuessId],
        candidates: &CandidateSet,
    ) -> Option<(GuessId, f64)> {
        guesses
            .par_iter()
            .map(|&guess| (guess, self.information_gain(guess, candidates)))
            .max_by(rank)
    }

    /// Same as [`best_guess`](Self::best_guess) on the calling thread
    #[must_use]
    pub fn best_guess_serial(
        &self,
        guesses: &[GuessId],
        candidates: &CandidateSet,
    ) -> Option<(GuessId, f64)> {
        guesses
            .iter()
            .map(|&guess| (guess, self.information_gain(guess, candidates)))
            .max_by(rank)
    }

    /// The `n` best guesses by information gain, best first
    #[must_use]
    pub fn ranked_guesses(
        &self,
        guesses: &[GuessId],
        candidates: &CandidateSet,
        n: usize,
    ) -> Vec<(GuessId, f64)> {
        let mut scored: Vec<(GuessId, f64)> = guesses
            .par_iter()
            .map(|&guess| (guess, self.information_gain(guess, candidates)))
            .collect();

        scored.sort_by(|a, b| rank(b, a));
        scored.truncate(n);
        scored
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{CandidateSet, GuessId, Vocabulary, WordSet};
    use crate::index::CompatibilityIndex;
    use crate::solver::config::InformationMode;
    use crate::solver::entropy::InformationScorer;

    #[test]
    fn selects_highest_gain() {
        let vocab = Vocabulary::new(
            &["slate", "irate", "crate", "grate"],
            &["aaaaa", "scrig"],
        )
        .unwrap();
        let index = CompatibilityIndex::build(&vocab);
        let scorer = InformationScorer::new(&index, InformationMode::Exact);
        let guesses: Vec<GuessId> = vocab.guess_ids().collect();

        let (best, gain) = scorer.best_guess(&guesses, &index.all_words()).unwrap();
        assert_eq!(vocab.guess(best).text(), "scrig");
        assert!((gain - 2.0).abs() < 1e-12);
    }

    #[test]
    fn ties_go_to_lower_index() {
        let vocab = Vocabulary::new(&["ccccc"], &["aaaaa", "bbbbb"]).unwrap();
        let index = CompatibilityIndex::build(&vocab);
        let scorer = InformationScorer::new(&index, InformationMode::Exact);
        let guesses: Vec<GuessId> = vocab.guess_ids().collect();

        // Nothing to learn from a single candidate; every guess scores zero
        let all = index.all_words();
        let parallel = scorer.best_guess(&guesses, &all).unwrap();
        let serial = scorer.best_guess_serial(&guesses, &all).unwrap();
        assert_eq!(parallel.0, GuessId::new(0));
        assert_eq!(parallel.0, serial.0);
    }

    #[test]
    fn serial_and_parallel_agree() {
        let vocab = Vocabulary::synthetic("abc", 4).unwrap();
        let index = CompatibilityIndex::build(&vocab);
        let scorer = InformationScorer::new(&index, InformationMode::Exact);
        let guesses: Vec<GuessId> = vocab.guess_ids().collect();
        let all = index.all_words();

        let parallel = scorer.best_guess(&guesses, &all).unwrap();
        let serial = scorer.best_guess_serial(&guesses, &all).unwrap();
        assert_eq!(parallel.0, serial.0);
        assert!((parallel.1 - serial.1).abs() < f64::EPSILON);
    }

    #[test]
    fn ranked_is_sorted_and_truncated() {
        let vocab = Vocabulary::synthetic("abc", 3).unwrap();
        let index = CompatibilityIndex::build(&vocab);
        let scorer = InformationScorer::new(&index, InformationMode::Exact);
        let guesses: Vec<GuessId> = vocab.guess_ids().collect();
        let all = index.all_words();

        let ranked = scorer.ranked_guesses(&guesses, &all, 5);
        assert_eq!(ranked.len(), 5);
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(ranked[0].0, scorer.best_guess(&guesses, &all).unwrap().0);
        assert!(scorer.ranked_guesses(&guesses, &all, 100).len() == all.len());
    }

    #[test]
    fn empty_pool() {
        let vocab = Vocabulary::new(&["aaaaa"], &[] as &[&str]).unwrap();
        let index = CompatibilityIndex::build(&vocab);
        let scorer = InformationScorer::new(&index, InformationMode::Exact);

        assert!(scorer.best_guess(&[], &index.all_words()).is_none());
        assert!(scorer.ranked_guesses(&[], &CandidateSet::empty(1), 3).is_empty());
    }
}
