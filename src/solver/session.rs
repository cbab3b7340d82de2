//! Turn-by-turn play
//!
//! A [`Session`] narrows the candidates as feedback arrives and follows a
//! precomputed plan while the player keeps to it. Leaving the plan triggers a
//! fresh search for the remaining turns.

use super::engine::Solver;
use super::strategy::StrategyNode;
use crate::core::{CandidateSet, GuessId, Hint, WordSet};
use crate::error::SearchError;
use log::debug;

/// A recommended next guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub guess: GuessId,
    /// Expected guesses to finish, or `None` when no strategy fits the
    /// remaining turns and the guess comes from information gain alone
    pub expected_turns: Option<f64>,
}

/// State of one game in progress
pub struct Session<'s, 'a> {
    solver: &'s Solver<'a>,
    candidates: CandidateSet,
    history: Vec<(GuessId, Hint)>,
    plan: Option<StrategyNode>,
    opening: Option<StrategyNode>,
}

impl<'s, 'a> Session<'s, 'a> {
    /// Start a game with every solution possible
    #[must_use]
    pub fn new(solver: &'s Solver<'a>) -> Self {
        Self {
            solver,
            candidates: solver.all_candidates(),
            history: Vec::new(),
            plan: None,
            opening: None,
        }
    }

    /// Start a game that follows `plan` from the first guess
    #[must_use]
    pub fn with_plan(solver: &'s Solver<'a>, plan: StrategyNode) -> Self {
        Self {
            plan: Some(plan.clone()),
            opening: Some(plan),
            ..Self::new(solver)
        }
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn history(&self) -> &[(GuessId, Hint)] {
        &self.history
    }

    #[must_use]
    pub fn turns_used(&self) -> usize {
        self.history.len()
    }

    /// Guesses left before the turn limit
    #[must_use]
    pub fn turns_left(&self) -> u32 {
        let used = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.solver.config().turn_limit.saturating_sub(used)
    }

    /// The part of the plan still being followed
    #[must_use]
    pub const fn plan(&self) -> Option<&StrategyNode> {
        self.plan.as_ref()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        let codec = self.solver.codec();
        self.history
            .last()
            .is_some_and(|&(_, hint)| codec.is_all_correct(hint))
    }

    /// Recommend the next guess
    ///
    /// Returns `None` once the game is solved or no candidate is left.
    ///
    /// # Errors
    /// Returns [`SearchError::InvariantViolation`] on an inconsistent index.
    pub fn suggest(&mut self) -> Result<Option<Suggestion>, SearchError> {
        if self.is_solved() || self.candidates.is_empty() {
            return Ok(None);
        }

        if let Some(plan) = &self.plan {
            return Ok(Some(Suggestion {
                guess: plan.guess,
                expected_turns: Some(plan.expected_turns),
            }));
        }

        let strategy = self.solver.find_optimal_strategy(
            &self.candidates,
            self.solver.guesses(),
            self.turns_left(),
            self.solver.config().bound,
        )?;

        if let Some(node) = strategy.into_node() {
            debug!(
                "planned {} candidates with {} nodes, {:.4} expected turns",
                self.remaining(),
                node.node_count(),
                node.expected_turns
            );
            let suggestion = Suggestion {
                guess: node.guess,
                expected_turns: Some(node.expected_turns),
            };
            if self.history.is_empty() {
                self.opening = Some(node.clone());
            }
            self.plan = Some(node);
            return Ok(Some(suggestion));
        }

        debug!(
            "no strategy within {} turns, falling back to information gain",
            self.turns_left()
        );
        Ok(self
            .solver
            .best_information_guess(&self.candidates)
            .map(|(guess, _)| Suggestion {
                guess,
                expected_turns: None,
            }))
    }

    /// Record that `guess` showed `hint`, returning the remaining candidate count
    pub fn apply(&mut self, guess: GuessId, hint: Hint) -> usize {
        self.plan = match self.plan.take() {
            Some(node) if node.guess == guess => node.children.get(&hint).cloned(),
            _ => None,
        };
        self.candidates = self.solver.narrow(&self.candidates, guess, hint);
        self.history.push((guess, hint));
        self.candidates.len()
    }

    /// Take back the last guess
    pub fn undo(&mut self) -> Option<(GuessId, Hint)> {
        let last = self.history.pop()?;
        let history = std::mem::take(&mut self.history);

        self.candidates = self.solver.all_candidates();
        self.plan.clone_from(&self.opening);
        for (guess, hint) in history {
            self.apply(guess, hint);
        }
        Some(last)
    }

    /// Start over, keeping the opening plan
    pub fn reset(&mut self) {
        self.history.clear();
        self.candidates = self.solver.all_candidates();
        self.plan.clone_from(&self.opening);
    }
}
