//! Word analysis command
//!
//! Reports how much a guess tells apart the current candidates and, on
//! request, the exact expected turns of opening with it.

use super::replay;
use crate::core::{GuessId, Hint, WordSet};
use crate::solver::entropy::{GuessMetrics, uniform_entropy};
use crate::solver::{Solver, Strategy};
use anyhow::Result;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// Entropy of the candidate set before guessing
    pub entropy: f64,
    /// 1-based position among all guesses by information gain
    pub rank: usize,
    pub is_candidate: bool,
    /// Expected turns when opening with the word, if requested and achievable
    pub expected_turns: Option<f64>,
}

/// Analyze `word` as the next guess after `history`
///
/// # Errors
///
/// Returns an error if:
/// - The word is not a legal guess
/// - The exact evaluation hits an index invariant violation
pub fn analyze_word(
    solver: &Solver<'_>,
    word: &str,
    history: &[(GuessId, Hint)],
    exact: bool,
) -> Result<AnalysisResult> {
    let guess = solver.vocabulary().guess_id(word)?;
    let candidates = replay(solver, history);
    let metrics = solver.metrics(guess, &candidates);

    let better = solver
        .ranked_guesses(&candidates, solver.guesses().len())
        .iter()
        .take_while(|&&(other, _)| other != guess)
        .count();

    let expected_turns = if exact {
        let used = u32::try_from(history.len()).unwrap_or(u32::MAX);
        let turns_left = solver.config().turn_limit.saturating_sub(used);
        match solver
            .search(solver.guesses())
            .evaluate_guess(guess, &candidates, turns_left)?
        {
            Strategy::Guess(node) => Some(node.expected_turns),
            Strategy::Poisoned => None,
        }
    } else {
        None
    };

    let is_candidate = solver
        .vocabulary()
        .word_of(guess)
        .is_some_and(|w| candidates.contains(w));

    Ok(AnalysisResult {
        word: solver.vocabulary().guess_text(guess).to_string(),
        metrics,
        total_candidates: candidates.len(),
        entropy: uniform_entropy(candidates.len()),
        rank: better + 1,
        is_candidate,
        expected_turns,
    })
}
