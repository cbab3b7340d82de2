//! Search configuration

use crate::core::DEFAULT_SPARSITY_THRESHOLD;

/// Default number of guesses available in a game
pub const DEFAULT_TURN_LIMIT: u32 = 6;

/// Samples drawn per guess in [`InformationMode::Sampled`] unless overridden
pub const DEFAULT_SAMPLES: usize = 1000;

/// How expected information gain is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InformationMode {
    /// Partition every candidate by hint
    #[default]
    Exact,
    /// Average over `samples` hypothesis words drawn with a fixed seed
    Sampled { samples: usize, seed: u64 },
}

impl InformationMode {
    /// Sampled mode with [`DEFAULT_SAMPLES`] draws
    #[must_use]
    pub const fn sampled(seed: u64) -> Self {
        Self::Sampled {
            samples: DEFAULT_SAMPLES,
            seed,
        }
    }
}

/// Tunables for [`StrategySearch`](super::StrategySearch)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Guesses available, including the one being chosen
    pub turn_limit: u32,
    /// Inclusive ceiling on expected turns; `f64::INFINITY` disables it
    pub bound: f64,
    /// Candidate sets below this density are searched in sparse form
    pub sparsity_threshold: f64,
    /// Branch-and-bound pruning; disabling it gives a brute-force search
    pub pruning: bool,
    /// Evaluate top-level guesses on the rayon pool
    pub parallel: bool,
    /// Evaluate the highest information-gain guess first at every node
    pub seed_with_information_gain: bool,
    pub information: InformationMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            turn_limit: DEFAULT_TURN_LIMIT,
            bound: f64::INFINITY,
            sparsity_threshold: DEFAULT_SPARSITY_THRESHOLD,
            pruning: true,
            parallel: true,
            seed_with_information_gain: true,
            information: InformationMode::Exact,
        }
    }
}

impl SearchConfig {
    /// Exhaustive, serial configuration used to cross-check pruning
    #[must_use]
    pub fn brute_force() -> Self {
        Self {
            pruning: false,
            parallel: false,
            seed_with_information_gain: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        self.turn_limit = turn_limit;
        self
    }

    #[must_use]
    pub const fn with_bound(mut self, bound: f64) -> Self {
        self.bound = bound;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.turn_limit, 6);
        assert!(config.bound.is_infinite());
        assert!((config.sparsity_threshold - 0.1).abs() < f64::EPSILON);
        assert!(config.pruning && config.parallel && config.seed_with_information_gain);
        assert_eq!(config.information, InformationMode::Exact);
    }

    #[test]
    fn brute_force_disables_shortcuts() {
        let config = SearchConfig::brute_force().with_turn_limit(4).with_bound(3.5);
        assert!(!config.pruning);
        assert!((config.bound - 3.5).abs() < f64::EPSILON);
        assert!(!config.parallel);
        assert!(!config.seed_with_information_gain);
        assert_eq!(config.turn_limit, 4);
    }

    #[test]
    fn sampled_uses_default_sample_count() {
        assert_eq!(
            InformationMode::sampled(7),
            InformationMode::Sampled {
                samples: DEFAULT_SAMPLES,
                seed: 7
            }
        );
    }
}
