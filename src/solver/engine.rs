//! Main solver interface
//!
//! Ties a vocabulary, its compatibility index and a search configuration
//! together behind the operations front ends need.

use super::config::SearchConfig;
use super::entropy::{GuessMetrics, InformationScorer};
use super::search::StrategySearch;
use super::strategy::Strategy;
use crate::core::{CandidateSet, GuessId, Hint, HintCodec, Vocabulary, Word, WordId};
use crate::error::{SearchError, WordleError};
use crate::index::CompatibilityIndex;

/// Main Wordle strategy solver
///
/// Holds read-only references to the vocabulary and index; any number of
/// solvers and sessions can share them.
pub struct Solver<'a> {
    vocabulary: &'a Vocabulary,
    index: &'a CompatibilityIndex,
    config: SearchConfig,
    guesses: Vec<GuessId>,
}

impl<'a> Solver<'a> {
    /// Create a solver over `vocabulary` using a matching `index`
    ///
    /// # Errors
    /// Returns `WordleError::IndexMismatch` if the index was built from a
    /// different vocabulary.
    pub fn new(
        vocabulary: &'a Vocabulary,
        index: &'a CompatibilityIndex,
        config: SearchConfig,
    ) -> Result<Self, WordleError> {
        if index.fingerprint() != vocabulary.fingerprint()
            || index.num_words() != vocabulary.num_words()
            || index.num_guesses() != vocabulary.num_guesses()
        {
            return Err(WordleError::IndexMismatch);
        }

        Ok(Self {
            vocabulary,
            index,
            config,
            guesses: vocabulary.guess_ids().collect(),
        })
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub const fn index(&self) -> &'a CompatibilityIndex {
        self.index
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub const fn codec(&self) -> HintCodec {
        self.vocabulary.codec()
    }

    /// Every legal guess, in index order
    #[must_use]
    pub fn guesses(&self) -> &[GuessId] {
        &self.guesses
    }

    /// Hint shown when `guess` is played against hidden `word`
    #[must_use]
    pub fn compute_hint(&self, word: WordId, guess: GuessId) -> Hint {
        self.index.hint(word, guess)
    }

    /// Hint for two arbitrary strings of the vocabulary's word length
    ///
    /// # Errors
    /// Returns `WordleError::InvalidWord` if either string is malformed.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategy::core::Vocabulary;
    /// use wordle_strategy::index::CompatibilityIndex;
    /// use wordle_strategy::solver::{SearchConfig, Solver};
    ///
    /// let vocab = Vocabulary::new(&["aaaaa", "bbbbb", "ccccc"], &[] as &[&str]).unwrap();
    /// let index = CompatibilityIndex::build(&vocab);
    /// let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();
    ///
    /// let hint = solver.hint_for_strings("aabbc", "dbbba").unwrap();
    /// assert_eq!(solver.hint_to_display_string(hint), "bbggy");
    /// ```
    pub fn hint_for_strings(&self, word: &str, guess: &str) -> Result<Hint, WordleError> {
        let length = self.vocabulary.word_length();
        let parse = |text: &str| {
            Word::new(text, length).map_err(|source| WordleError::InvalidWord {
                word: text.to_string(),
                source,
            })
        };
        let word = parse(word)?;
        let guess = parse(guess)?;
        Ok(self.codec().hint(word.bytes(), guess.bytes()))
    }

    #[must_use]
    pub fn hint_to_display_string(&self, hint: Hint) -> String {
        self.codec().decode(hint)
    }

    /// Parse a `b`/`y`/`g` feedback string
    ///
    /// # Errors
    /// Returns `WordleError::InvalidHint` for wrong length or characters.
    pub fn display_string_to_hint(&self, text: &str) -> Result<Hint, WordleError> {
        self.codec().encode(text)
    }

    #[must_use]
    pub fn all_candidates(&self) -> CandidateSet {
        self.index.all_words()
    }

    /// Candidates still possible after `guess` showed `hint`
    #[must_use]
    pub fn narrow(&self, candidates: &CandidateSet, guess: GuessId, hint: Hint) -> CandidateSet {
        self.index
            .compatible(guess, hint, candidates)
            .rebalanced(self.config.sparsity_threshold)
    }

    /// Strategy search over `guesses` with this solver's configuration
    #[must_use]
    pub fn search<'s>(&'s self, guesses: &'s [GuessId]) -> StrategySearch<'s> {
        StrategySearch::new(self.index, guesses, self.config)
    }

    /// Optimal strategy for `candidates` using `guesses`
    ///
    /// # Errors
    /// Returns [`SearchError::InvariantViolation`] on an inconsistent index.
    pub fn find_optimal_strategy(
        &self,
        candidates: &CandidateSet,
        guesses: &[GuessId],
        turn_limit: u32,
        bound: f64,
    ) -> Result<Strategy, SearchError> {
        self.search(guesses)
            .find_optimal_strategy(candidates, turn_limit, bound)
    }

    fn scorer(&self) -> InformationScorer<'a> {
        InformationScorer::new(self.index, self.config.information)
    }

    /// Expected entropy reduction of `guess`, for display
    #[must_use]
    pub fn expected_information_gain(&self, guess: GuessId, candidates: &CandidateSet) -> f64 {
        self.scorer().information_gain(guess, candidates)
    }

    #[must_use]
    pub fn metrics(&self, guess: GuessId, candidates: &CandidateSet) -> GuessMetrics {
        self.scorer().metrics(guess, candidates)
    }

    /// Highest information-gain guess across the whole guess list
    #[must_use]
    pub fn best_information_guess(&self, candidates: &CandidateSet) -> Option<(GuessId, f64)> {
        self.scorer().best_guess(&self.guesses, candidates)
    }

    #[must_use]
    pub fn ranked_guesses(&self, candidates: &CandidateSet, n: usize) -> Vec<(GuessId, f64)> {
        self.scorer().ranked_guesses(&self.guesses, candidates, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordSet;

    fn setup() -> (Vocabulary, CompatibilityIndex) {
        let vocab = Vocabulary::new(
            &["aaaaa", "bbbbb", "ccccc"],
            &["aaaaa", "bbbbb", "ccccc", "aaabb", "ddddd"],
        )
        .unwrap();
        let index = CompatibilityIndex::build(&vocab);
        (vocab, index)
    }

    #[test]
    fn rejects_foreign_index() {
        let (vocab, _) = setup();
        let other = Vocabulary::new(&["aaaaa", "bbbbb", "ccccc"], &[] as &[&str]).unwrap();
        let other_index = CompatibilityIndex::build(&other);

        assert!(matches!(
            Solver::new(&vocab, &other_index, SearchConfig::default()),
            Err(WordleError::IndexMismatch)
        ));
    }

    #[test]
    fn hint_conversions() {
        let (vocab, index) = setup();
        let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();

        let a = vocab.word_id("aaaaa").unwrap();
        let b = vocab.guess_id("bbbbb").unwrap();
        let hint = solver.compute_hint(a, b);
        assert_eq!(solver.hint_to_display_string(hint), "bbbbb");
        assert_eq!(solver.display_string_to_hint("bbbbb").unwrap(), hint);
        assert!(solver.display_string_to_hint("bbbb").is_err());
        assert!(solver.hint_for_strings("aab", "ccccc").is_err());
    }

    #[test]
    fn narrowing_keeps_the_answer() {
        let (vocab, index) = setup();
        let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();
        let all = solver.all_candidates();
        let guess = vocab.guess_id("aaaaa").unwrap();

        for word in vocab.word_ids() {
            let narrowed = solver.narrow(&all, guess, solver.compute_hint(word, guess));
            assert!(narrowed.contains(word));
            assert!(narrowed.len() <= all.len());
        }
    }

    #[test]
    fn optimal_strategy_through_facade() {
        let (vocab, index) = setup();
        let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();

        let strategy = solver
            .find_optimal_strategy(&solver.all_candidates(), solver.guesses(), 6, f64::INFINITY)
            .unwrap();
        assert!((strategy.expected_turns() - 2.0).abs() < 1e-12);

        let (best, gain) = solver.best_information_guess(&solver.all_candidates()).unwrap();
        assert_eq!(vocab.guess_text(best), "aaabb");
        assert!((gain - solver.expected_information_gain(best, &solver.all_candidates())).abs() < 1e-12);
        assert_eq!(solver.metrics(best, &solver.all_candidates()).classes, 3);
    }
}
