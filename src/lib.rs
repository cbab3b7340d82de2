//! Wordle Strategy
//!
//! Exact expected-turns strategy search for Wordle-style games: given a
//! solution list and a guess list, find the decision tree that minimizes the
//! expected number of guesses, using information gain to seed a
//! branch-and-bound expectimax search over precomputed hint partitions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_strategy::core::Vocabulary;
//! use wordle_strategy::index::CompatibilityIndex;
//! use wordle_strategy::solver::{SearchConfig, Solver};
//!
//! let vocab = Vocabulary::new(
//!     &["aaaaa", "bbbbb", "ccccc"],
//!     &["aaaaa", "bbbbb", "ccccc", "aaabb", "ddddd"],
//! )
//! .unwrap();
//! let index = CompatibilityIndex::build(&vocab);
//! let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();
//!
//! let strategy = solver
//!     .find_optimal_strategy(&solver.all_candidates(), solver.guesses(), 6, f64::INFINITY)
//!     .unwrap();
//! assert!((strategy.expected_turns() - 2.0).abs() < 1e-12);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Precomputed hint partitions
pub mod index;

// Search algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
