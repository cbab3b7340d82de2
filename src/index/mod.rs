//! Precomputed compatibility between guesses, hints and words
//!
//! Built once per vocabulary and shared read-only by every search.

mod cache;
mod compatibility;

pub use compatibility::CompatibilityIndex;
