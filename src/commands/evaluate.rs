//! Strategy evaluation command
//!
//! Plays every solution word through a strategy tree and summarizes the
//! number of guesses needed.

use super::progress_bar;
use crate::solver::{Solver, StrategyNode};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of evaluating a strategy on every solution
pub struct EvaluationResult {
    pub total_words: usize,
    pub total_guesses: u64,
    pub average_guesses: f64,
    /// Expected turns claimed by the root of the tree
    pub expected_turns: f64,
    pub min_guesses: u32,
    pub max_guesses: u32,
    pub distribution: BTreeMap<u32, usize>,
    /// Words the tree does not solve within the turn limit
    pub failures: Vec<String>,
    pub duration: Duration,
}

/// Walk `plan` for every solution word
#[must_use]
pub fn evaluate_strategy(
    solver: &Solver<'_>,
    plan: &StrategyNode,
    show_progress: bool,
) -> EvaluationResult {
    let vocab = solver.vocabulary();
    let turn_limit = solver.config().turn_limit;
    let pb = show_progress.then(|| progress_bar(vocab.num_words() as u64, "Playing solutions"));

    let start = Instant::now();
    let mut total_guesses = 0u64;
    let mut min_guesses = u32::MAX;
    let mut max_guesses = 0;
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();

    for word in vocab.word_ids() {
        match plan.turns_to_solve(word, solver.index()) {
            Some(turns) if turns <= turn_limit => {
                total_guesses += u64::from(turns);
                min_guesses = min_guesses.min(turns);
                max_guesses = max_guesses.max(turns);
                *distribution.entry(turns).or_insert(0) += 1;
            }
            _ => failures.push(vocab.word_text(word).to_string()),
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let solved: usize = distribution.values().sum();
    EvaluationResult {
        total_words: vocab.num_words(),
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        expected_turns: plan.expected_turns,
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;
    use crate::index::CompatibilityIndex;
    use crate::solver::{SearchConfig, Strategy};

    fn optimal(solver: &Solver<'_>) -> StrategyNode {
        solver
            .find_optimal_strategy(&solver.all_candidates(), solver.guesses(), 6, f64::INFINITY)
            .unwrap()
            .into_node()
            .unwrap()
    }

    #[test]
    fn mean_matches_expected_turns() {
        let vocab = Vocabulary::synthetic("abc", 4).unwrap();
        let index = CompatibilityIndex::build(&vocab);
        let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();
        let plan = optimal(&solver);

        let result = evaluate_strategy(&solver, &plan, false);
        assert_eq!(result.total_words, 81);
        assert!(result.failures.is_empty());
        assert_eq!(result.distribution.values().sum::<usize>(), 81);
        assert!((result.average_guesses - result.expected_turns).abs() < 1e-9);
        assert_eq!(result.min_guesses, 1);
        assert!(result.max_guesses as usize <= plan.depth());
    }

    #[test]
    fn incomplete_tree_reports_failures() {
        let vocab = Vocabulary::new(&["aaaaa", "bbbbb", "ccccc"], &[] as &[&str]).unwrap();
        let index = CompatibilityIndex::build(&vocab);
        let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();
        let leaf = StrategyNode::leaf(vocab.guess_id("bbbbb").unwrap());

        let result = evaluate_strategy(&solver, &leaf, false);
        assert_eq!(result.failures, vec!["aaaaa", "ccccc"]);
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert!((result.average_guesses - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn turn_limit_counts_as_failure() {
        let vocab = Vocabulary::new(&["aaaaa", "bbbbb", "ccccc"], &[] as &[&str]).unwrap();
        let index = CompatibilityIndex::build(&vocab);
        let unlimited = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();
        let plan = optimal(&unlimited);
        assert_eq!(plan.depth(), 3);

        let limited = Solver::new(&vocab, &index, SearchConfig::default().with_turn_limit(2)).unwrap();
        let result = evaluate_strategy(&limited, &plan, false);
        assert_eq!(result.failures.len(), 1);
        assert!(matches!(
            limited.find_optimal_strategy(&limited.all_candidates(), limited.guesses(), 2, f64::INFINITY),
            Ok(Strategy::Poisoned)
        ));
    }
}
