//! Word solving command
//!
//! Plays a known hidden word by following the session's suggestions.

use crate::core::{Hint, WordSet};
use crate::solver::{Session, Solver, StrategyNode};
use anyhow::Result;

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub hint: Hint,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub information_gain: f64,
    /// Expected guesses to finish from this position, when a strategy exists
    pub expected_turns: Option<f64>,
}

/// Solve `target` with the given solver, optionally following `plan`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is not a solution word
/// - The search hits an index invariant violation
pub fn solve_word(
    solver: &Solver<'_>,
    target: &str,
    plan: Option<StrategyNode>,
) -> Result<SolveResult> {
    let word = solver.vocabulary().word_id(target)?;
    let mut session = match plan {
        Some(plan) => Session::with_plan(solver, plan),
        None => Session::new(solver),
    };
    let mut guesses = Vec::new();

    while session.turns_left() > 0 {
        let Some(suggestion) = session.suggest()? else {
            break;
        };
        let candidates_before = session.remaining();
        let information_gain =
            solver.expected_information_gain(suggestion.guess, session.candidates());
        let hint = solver.compute_hint(word, suggestion.guess);
        let candidates_after = session.apply(suggestion.guess, hint);

        guesses.push(GuessStep {
            word: solver.vocabulary().guess_text(suggestion.guess).to_string(),
            hint,
            candidates_before,
            candidates_after,
            information_gain,
            expected_turns: suggestion.expected_turns,
        });

        debug_assert!(session.candidates().contains(word));
        if session.is_solved() {
            break;
        }
    }

    Ok(SolveResult {
        success: session.is_solved(),
        guesses,
        target: solver.vocabulary().word_text(word).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;
    use crate::index::CompatibilityIndex;
    use crate::solver::SearchConfig;

    fn setup() -> (Vocabulary, CompatibilityIndex) {
        let vocab = Vocabulary::synthetic("abc", 3).unwrap();
        let index = CompatibilityIndex::build(&vocab);
        (vocab, index)
    }

    #[test]
    fn solve_word_succeeds() {
        let (vocab, index) = setup();
        let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();

        let result = solve_word(&solver, "CAB", None).unwrap();
        assert!(result.success);
        assert_eq!(result.target, "cab");
        assert_eq!(result.guesses.last().unwrap().word, "cab");
        assert!(solver.codec().is_all_correct(result.guesses.last().unwrap().hint));
    }

    #[test]
    fn solve_records_history() {
        let (vocab, index) = setup();
        let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();

        let result = solve_word(&solver, "bca", None).unwrap();
        assert_eq!(result.guesses[0].candidates_before, 27);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.expected_turns.is_some());
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let (vocab, index) = setup();
        let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();
        assert!(solve_word(&solver, "zzz", None).is_err());
    }

    #[test]
    fn plan_matches_fresh_search() {
        let (vocab, index) = setup();
        let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();
        let plan = solver
            .find_optimal_strategy(&solver.all_candidates(), solver.guesses(), 6, f64::INFINITY)
            .unwrap()
            .into_node()
            .unwrap();

        for word in ["aaa", "abc", "ccb"] {
            let planned = solve_word(&solver, word, Some(plan.clone())).unwrap();
            let fresh = solve_word(&solver, word, None).unwrap();
            let planned_words: Vec<_> = planned.guesses.iter().map(|g| g.word.clone()).collect();
            let fresh_words: Vec<_> = fresh.guesses.iter().map(|g| g.word.clone()).collect();
            assert_eq!(planned_words, fresh_words);
        }
    }
}
