//! Wordle strategy search
//!
//! The exact expected-turns search, the information-gain scorer that seeds
//! it, and the session and facade types built on top.

pub mod config;
mod engine;
pub mod entropy;
mod search;
mod session;
pub mod strategy;

pub use config::{DEFAULT_SAMPLES, DEFAULT_TURN_LIMIT, InformationMode, SearchConfig};
pub use engine::Solver;
pub use search::{StrategySearch, min_expected_turns};
pub use session::{Session, Suggestion};
pub use strategy::{Strategy, StrategyNode};
