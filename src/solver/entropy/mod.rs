//! Information-theoretic guess scoring
//!
//! Shannon entropy of hint distributions, used to seed the strategy search and
//! to rank guesses for display.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, InformationScorer, shannon_entropy, uniform_entropy};
