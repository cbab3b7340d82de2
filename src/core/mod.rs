//! Core domain types
//!
//! Words, hints, vocabularies and candidate sets. Everything here is pure and
//! immutable once constructed, apart from the candidate sets produced by narrowing.

pub mod candidates;
mod hint;
pub(crate) mod vocabulary;
mod word;

pub use candidates::{CandidateSet, DEFAULT_SPARSITY_THRESHOLD, DenseSet, SparseSet, WordSet};
pub use hint::{ABSENT, CORRECT, Hint, HintCodec, MISPLACED};
pub use vocabulary::{GuessId, Vocabulary, WordId, synthetic_words};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
