//! Expected-turns strategy search
//!
//! Depth-first expectimax over hint partitions with branch-and-bound pruning.
//! Every guess is scored by the sum of guesses needed over all hypothesis
//! words; a node's `expected_turns` is that sum divided by the number of
//! candidates. Limits are tracked on sums so the pruning tests are exact
//! additions rather than divisions.
//!
//! Ordering between guesses is lexicographic on (expected turns, guess index),
//! which keeps pruned, brute-force and parallel runs in agreement. Pruning only
//! discards branches that are strictly worse than the incumbent.

use super::config::SearchConfig;
use super::entropy::InformationScorer;
use super::strategy::{Strategy, StrategyNode};
use crate::core::{CandidateSet, GuessId, Hint, WordId, WordSet};
use crate::error::SearchError;
use crate::index::CompatibilityIndex;
use indicatif::ProgressBar;
use log::{debug, trace};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Relative slack applied to every comparison of summed costs
const TOLERANCE: f64 = 1e-9;

/// Fewest expected guesses any strategy can need for `k` candidates
///
/// At most one word can be solved by the first guess; every other word needs
/// at least one more.
#[inline]
#[must_use]
pub fn min_expected_turns(k: usize) -> f64 {
    if k == 0 { 0.0 } else { 2.0 - 1.0 / k as f64 }
}

/// Lowest possible summed cost of one hint class
#[inline]
fn class_floor(size: usize, all_correct: bool) -> f64 {
    if all_correct {
        1.0
    } else {
        // size * (1 + min_expected_turns(size))
        3.0 * size as f64 - 1.0
    }
}

#[inline]
fn tolerance(n: usize) -> f64 {
    TOLERANCE * n as f64
}

/// Convert a per-word bound to a limit on summed costs
#[inline]
fn limit_sum(bound: f64, n: usize) -> f64 {
    if bound.is_finite() {
        bound * n as f64 + tolerance(n)
    } else {
        f64::INFINITY
    }
}

/// Best strategy found so far in one call
struct Incumbent {
    best: Option<(f64, StrategyNode)>,
    ceiling: f64,
    tolerance: f64,
}

impl Incumbent {
    const fn new(ceiling: f64, tolerance: f64) -> Self {
        Self {
            best: None,
            ceiling,
            tolerance,
        }
    }

    /// Summed cost a guess must not exceed to stay in contention
    fn limit(&self) -> f64 {
        match &self.best {
            Some((sum, _)) => self.ceiling.min(sum + self.tolerance),
            None => self.ceiling,
        }
    }

    /// Replace the incumbent if `(sum, node.guess)` sorts before it
    fn offer(&mut self, sum: f64, node: StrategyNode) -> bool {
        let better = match &self.best {
            None => true,
            Some((best_sum, best)) => {
                if (sum - best_sum).abs() <= self.tolerance {
                    node.guess < best.guess
                } else {
                    sum < *best_sum
                }
            }
        };
        if better {
            self.best = Some((sum, node));
        }
        better
    }

    fn into_strategy(self) -> Strategy {
        match self.best {
            Some((sum, node)) if sum <= self.ceiling => Strategy::Guess(node),
            _ => Strategy::Poisoned,
        }
    }
}

/// Branch-and-bound search for the strategy minimizing expected turns
pub struct StrategySearch<'a> {
    index: &'a CompatibilityIndex,
    guesses: &'a [GuessId],
    config: SearchConfig,
    scorer: InformationScorer<'a>,
    progress: Option<ProgressBar>,
}

impl<'a> StrategySearch<'a> {
    /// Search over `guesses` using the precomputed `index`
    ///
    /// Every solution word is assumed to be playable as a guess, which
    /// [`Vocabulary`](crate::core::Vocabulary) guarantees.
    #[must_use]
    pub const fn new(
        index: &'a CompatibilityIndex,
        guesses: &'a [GuessId],
        config: SearchConfig,
    ) -> Self {
        Self {
            index,
            guesses,
            config,
            scorer: InformationScorer::new(index, config.information),
            progress: None,
        }
    }

    /// Report each finished top-level guess on `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the strategy with the fewest expected turns
    ///
    /// `turn_limit` counts the guess chosen here. `bound` is an inclusive
    /// ceiling on expected turns; pass `f64::INFINITY` for none. Exceeding
    /// either yields [`Strategy::Poisoned`].
    /// A NaN bound admits no strategy.
    ///
    /// # Errors
    /// Returns [`SearchError::InvariantViolation`] if the index disagrees with
    /// itself about the size of a hint class.
    ///
    /// # Examples
    /// ```
    /// use wordle_strategy::core::Vocabulary;
    /// use wordle_strategy::index::CompatibilityIndex;
    /// use wordle_strategy::solver::{SearchConfig, StrategySearch};
    ///
    /// let vocab = Vocabulary::new(&["aaaaa", "bbbbb"], &[] as &[&str]).unwrap();
    /// let index = CompatibilityIndex::build(&vocab);
    /// let guesses: Vec<_> = vocab.guess_ids().collect();
    ///
    /// let search = StrategySearch::new(&index, &guesses, SearchConfig::default());
    /// let strategy = search
    ///     .find_optimal_strategy(&index.all_words(), 6, f64::INFINITY)
    ///     .unwrap();
    /// assert!((strategy.expected_turns() - 1.5).abs() < 1e-12);
    /// ```
    pub fn find_optimal_strategy(
        &self,
        candidates: &CandidateSet,
        turn_limit: u32,
        bound: f64,
    ) -> Result<Strategy, SearchError> {
        let candidates = candidates.clone().rebalanced(self.config.sparsity_threshold);
        let strategy = self.solve(&candidates, turn_limit, bound, true)?;
        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }
        Ok(strategy)
    }

    /// Exact expected turns when opening with `guess` and playing optimally after
    ///
    /// Poisoned if the guess cannot finish within `turn_limit` or learns nothing.
    ///
    /// # Errors
    /// Returns [`SearchError::InvariantViolation`] on an inconsistent index.
    pub fn evaluate_guess(
        &self,
        guess: GuessId,
        candidates: &CandidateSet,
        turn_limit: u32,
    ) -> Result<Strategy, SearchError> {
        if candidates.is_empty() || turn_limit == 0 {
            return Ok(Strategy::Poisoned);
        }
        let candidates = candidates.clone().rebalanced(self.config.sparsity_threshold);
        let evaluated = self.evaluate(guess, &candidates, turn_limit, f64::INFINITY)?;
        Ok(evaluated.map_or(Strategy::Poisoned, |(_, node)| Strategy::Guess(node)))
    }

    fn solve(
        &self,
        candidates: &CandidateSet,
        turns_left: u32,
        bound: f64,
        top_level: bool,
    ) -> Result<Strategy, SearchError> {
        let n = candidates.len();
        if n == 0 || turns_left == 0 || (n >= 2 && turns_left < 2) || bound.is_nan() {
            return Ok(Strategy::Poisoned);
        }

        let ceiling = limit_sum(bound, n);
        if n <= 2 {
            let node = self.small_set(candidates);
            let sum = node.expected_turns * n as f64;
            return Ok(if sum <= ceiling {
                Strategy::Guess(node)
            } else {
                Strategy::Poisoned
            });
        }

        let pruning = self.config.pruning;
        if pruning {
            if 2.0 * n as f64 - 1.0 > ceiling {
                return Ok(Strategy::Poisoned);
            }
            if let Some(node) = self.perfect_split(candidates) {
                trace!("perfect split by {} over {n} candidates", node.guess);
                return Ok(Strategy::Guess(node));
            }
        }

        let mut incumbent = Incumbent::new(ceiling, tolerance(n));
        let seed = if pruning && self.config.seed_with_information_gain {
            let best = if top_level && self.config.parallel {
                self.scorer.best_guess(self.guesses, candidates)
            } else {
                self.scorer.best_guess_serial(self.guesses, candidates)
            };
            best.map(|(guess, gain)| {
                trace!("seeding {n} candidates with {guess} ({gain:.3} bits)");
                guess
            })
        } else {
            None
        };

        if let Some(guess) = seed {
            if let Some((sum, node)) = self.evaluate(guess, candidates, turns_left, incumbent.limit())? {
                incumbent.offer(sum, node);
            }
            self.tick(top_level);
        }

        let rest = self.guesses.iter().copied().filter(|&g| Some(g) != seed);

        if top_level && self.config.parallel {
            let shared = Mutex::new(incumbent);
            let remaining: Vec<GuessId> = rest.collect();
            remaining.par_iter().try_for_each(|&guess| {
                let limit = shared
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .limit();
                let evaluated = self.evaluate(guess, candidates, turns_left, limit);
                self.tick(true);
                if let Some((sum, node)) = evaluated? {
                    let mut incumbent = shared.lock().unwrap_or_else(PoisonError::into_inner);
                    if incumbent.offer(sum, node) {
                        debug!("new best {guess}: {:.6} expected turns", sum / n as f64);
                    }
                }
                Ok::<(), SearchError>(())
            })?;
            incumbent = shared.into_inner().unwrap_or_else(PoisonError::into_inner);
        } else {
            for guess in rest {
                let evaluated = self.evaluate(guess, candidates, turns_left, incumbent.limit())?;
                self.tick(top_level);
                if let Some((sum, node)) = evaluated {
                    if incumbent.offer(sum, node) && top_level {
                        debug!("new best {guess}: {:.6} expected turns", sum / n as f64);
                    }
                }
            }
        }

        Ok(incumbent.into_strategy())
    }

    /// Cost of playing `guess` against `candidates`, or `None` if it cannot
    /// stay within `limit` or `turns_left`
    ///
    /// Returns the summed cost over all candidates and the resulting node.
    fn evaluate(
        &self,
        guess: GuessId,
        candidates: &CandidateSet,
        turns_left: u32,
        limit: f64,
    ) -> Result<Option<(f64, StrategyNode)>, SearchError> {
        let n = candidates.len();
        let codec = self.index.codec();
        let classes = self.index.partition(guess, candidates);

        // One class without the guess itself: nothing learned
        if classes.len() == 1 && !codec.is_all_correct(classes[0].0) {
            return Ok(None);
        }

        let mut rest = 0.0;
        for &(hint, size) in &classes {
            let all_correct = codec.is_all_correct(hint);
            let needed = if all_correct {
                1
            } else if size == 1 {
                2
            } else {
                3
            };
            if turns_left < needed {
                return Ok(None);
            }
            rest += class_floor(size, all_correct);
        }

        let pruning = self.config.pruning;
        if pruning && rest > limit {
            return Ok(None);
        }

        let mut sum = 0.0;
        let mut children = BTreeMap::new();
        for (hint, size) in classes {
            let all_correct = codec.is_all_correct(hint);
            rest -= class_floor(size, all_correct);

            let remaining = self.index.compatible(guess, hint, candidates);
            if remaining.len() != size {
                return Err(SearchError::InvariantViolation {
                    guess,
                    hint,
                    expected: size,
                    found: remaining.len(),
                });
            }

            if all_correct {
                sum += 1.0;
            } else if size <= 2 {
                let child = self.small_set(&remaining);
                sum += size as f64 * (1.0 + child.expected_turns);
                children.insert(hint, child);
            } else {
                let sub_bound = if pruning {
                    (limit - sum - rest) / size as f64 - 1.0
                } else {
                    f64::INFINITY
                };
                let remaining = remaining.rebalanced(self.config.sparsity_threshold);
                let Strategy::Guess(child) =
                    self.solve(&remaining, turns_left - 1, sub_bound, false)?
                else {
                    return Ok(None);
                };
                sum += size as f64 * (1.0 + child.expected_turns);
                children.insert(hint, child);
            }

            if pruning && sum + rest > limit {
                return Ok(None);
            }
        }

        let node = StrategyNode {
            guess,
            expected_turns: sum / n as f64,
            children,
        };
        Ok(Some((sum, node)))
    }

    /// Optimal plan for one or two candidates: guess the lower word first
    fn small_set(&self, candidates: &CandidateSet) -> StrategyNode {
        let mut words = candidates.iter();
        let Some(first) = words.next() else {
            return StrategyNode::leaf(GuessId::new(0));
        };
        let guess = self.index.guess_of(first);
        let mut node = StrategyNode::leaf(guess);
        if let Some(second) = words.next() {
            node.expected_turns = 1.5;
            node.children.insert(
                self.index.hint(second, guess),
                StrategyNode::leaf(self.index.guess_of(second)),
            );
        }
        node
    }

    /// A candidate that tells every other candidate apart, lowest index first
    ///
    /// Such a guess reaches [`min_expected_turns`] and so is optimal.
    fn perfect_split(&self, candidates: &CandidateSet) -> Option<StrategyNode> {
        let n = candidates.len();
        candidates.iter().find_map(|word| {
            let guess = self.index.guess_of(word);
            let classes = self.index.partition(guess, candidates);
            (classes.len() == n).then(|| {
                let children: BTreeMap<Hint, StrategyNode> = candidates
                    .iter()
                    .filter(|&other| other != word)
                    .map(|other: WordId| {
                        (
                            self.index.hint(other, guess),
                            StrategyNode::leaf(self.index.guess_of(other)),
                        )
                    })
                    .collect();
                StrategyNode {
                    guess,
                    expected_turns: min_expected_turns(n),
                    children,
                }
            })
        })
    }

    fn tick(&self, top_level: bool) {
        if !top_level {
            return;
        }
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
    }
}
