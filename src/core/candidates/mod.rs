//! Sets of words that are still possible
//!
//! [`CandidateSet`] switches between a dense bit-vector and a sparse index
//! list. Both representations implement [`WordSet`] with identical semantics;
//! the representation only changes through [`CandidateSet::rebalanced`].

mod dense;
mod sparse;

pub use dense::{DenseIter, DenseSet};
pub use sparse::SparseSet;

use crate::core::WordId;
use std::iter::Copied;
use std::slice;

/// Density below which the sparse representation is preferred
pub const DEFAULT_SPARSITY_THRESHOLD: f64 = 0.1;

/// Common behaviour of word sets over a fixed universe of word indices
pub trait WordSet {
    /// Size of the word index space
    fn universe(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, word: WordId) -> bool;

    /// Words in increasing index order
    fn iter(&self) -> impl Iterator<Item = WordId> + '_;

    /// Words that are also in `row`
    #[must_use]
    fn intersect_row(&self, row: &DenseSet) -> Self
    where
        Self: Sized;

    /// Number of words that are also in `row`
    fn count_in_row(&self, row: &DenseSet) -> usize;

    /// Fraction of the universe present in the set
    fn density(&self) -> f64 {
        if self.universe() == 0 {
            0.0
        } else {
            self.len() as f64 / self.universe() as f64
        }
    }
}

/// Candidate words in whichever representation suits their density
#[derive(Debug, Clone)]
pub enum CandidateSet {
    Dense(DenseSet),
    Sparse(SparseSet),
}

impl CandidateSet {
    /// Every word of the universe
    #[must_use]
    pub fn all(universe: usize) -> Self {
        Self::Dense(DenseSet::full(universe))
    }

    #[must_use]
    pub const fn empty(universe: usize) -> Self {
        Self::Sparse(SparseSet::empty(universe))
    }

    /// Sparse set from arbitrary word indices
    ///
    /// # Panics
    /// Panics if any word is outside the universe, as [`DenseSet::insert`] does
    #[must_use]
    pub fn from_words<I: IntoIterator<Item = WordId>>(universe: usize, words: I) -> Self {
        Self::Sparse(SparseSet::from_words(universe, words))
    }

    #[must_use]
    pub const fn is_dense(&self) -> bool {
        matches!(self, Self::Dense(_))
    }

    #[must_use]
    pub fn into_dense(self) -> Self {
        match self {
            Self::Dense(_) => self,
            Self::Sparse(set) => Self::Dense(DenseSet::from_words(set.universe(), set.iter())),
        }
    }

    #[must_use]
    pub fn into_sparse(self) -> Self {
        match self {
            Self::Sparse(_) => self,
            Self::Dense(set) => Self::Sparse(SparseSet::from_words(set.universe(), set.iter())),
        }
    }

    /// Pick the representation for the current density
    ///
    /// Sets below `threshold` become sparse; all others become dense.
    #[must_use]
    pub fn rebalanced(self, threshold: f64) -> Self {
        if self.density() < threshold {
            self.into_sparse()
        } else {
            self.into_dense()
        }
    }
}

impl WordSet for CandidateSet {
    fn universe(&self) -> usize {
        match self {
            Self::Dense(set) => set.universe(),
            Self::Sparse(set) => set.universe(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Dense(set) => set.len(),
            Self::Sparse(set) => set.len(),
        }
    }

    fn contains(&self, word: WordId) -> bool {
        match self {
            Self::Dense(set) => set.contains(word),
            Self::Sparse(set) => set.contains(word),
        }
    }

    fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        match self {
            Self::Dense(set) => CandidateIter::Dense(DenseIter::new(set.blocks())),
            Self::Sparse(set) => CandidateIter::Sparse(set.as_slice().iter().copied()),
        }
    }

    fn intersect_row(&self, row: &DenseSet) -> Self {
        match self {
            Self::Dense(set) => Self::Dense(set.intersect_row(row)),
            Self::Sparse(set) => Self::Sparse(set.intersect_row(row)),
        }
    }

    fn count_in_row(&self, row: &DenseSet) -> usize {
        match self {
            Self::Dense(set) => set.count_in_row(row),
            Self::Sparse(set) => set.count_in_row(row),
        }
    }
}

impl PartialEq for CandidateSet {
    fn eq(&self, other: &Self) -> bool {
        self.universe() == other.universe()
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl Eq for CandidateSet {}

/// Iterator over either representation
enum CandidateIter<'a> {
    Dense(DenseIter<'a>),
    Sparse(Copied<slice::Iter<'a, WordId>>),
}

impl Iterator for CandidateIter<'_> {
    type Item = WordId;

    #[inline]
    fn next(&mut self) -> Option<WordId> {
        match self {
            Self::Dense(iter) => iter.next(),
            Self::Sparse(iter) => iter.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[u32]) -> Vec<WordId> {
        values.iter().copied().map(WordId::new).collect()
    }

    #[test]
    fn representations_share_semantics() {
        let words = ids(&[3, 17, 64, 90]);
        let sparse = CandidateSet::from_words(100, words.clone());
        let dense = sparse.clone().into_dense();

        assert!(dense.is_dense());
        assert!(!sparse.is_dense());
        assert_eq!(dense, sparse);
        assert_eq!(dense.len(), 4);
        assert_eq!(dense.iter().collect::<Vec<_>>(), words);
        for w in 0..100 {
            let word = WordId::new(w);
            assert_eq!(dense.contains(word), sparse.contains(word));
        }

        let row = DenseSet::from_words(100, ids(&[17, 18, 90]));
        assert_eq!(dense.intersect_row(&row), sparse.intersect_row(&row));
        assert_eq!(dense.count_in_row(&row), 2);
        assert_eq!(sparse.count_in_row(&row), 2);
        // Intersection keeps the representation
        assert!(dense.intersect_row(&row).is_dense());
        assert!(!sparse.intersect_row(&row).is_dense());
    }

    #[test]
    fn rebalance_follows_density() {
        let all = CandidateSet::all(100);
        assert!((all.density() - 1.0).abs() < f64::EPSILON);
        assert!(all.clone().rebalanced(DEFAULT_SPARSITY_THRESHOLD).is_dense());

        let few = CandidateSet::from_words(100, ids(&[1, 2, 3]));
        assert!(!few.clone().rebalanced(DEFAULT_SPARSITY_THRESHOLD).is_dense());

        let row = DenseSet::from_words(100, ids(&[5, 6]));
        let narrowed = all.intersect_row(&row);
        assert!(narrowed.is_dense());
        let rebalanced = narrowed.clone().rebalanced(DEFAULT_SPARSITY_THRESHOLD);
        assert!(!rebalanced.is_dense());
        assert_eq!(rebalanced, narrowed);

        // Exactly at the threshold stays dense
        let ten = CandidateSet::from_words(100, (0..10).map(WordId::new));
        assert!(ten.rebalanced(0.1).is_dense());
    }

    #[test]
    fn narrowing_never_grows() {
        let all = CandidateSet::all(150);
        let row = DenseSet::from_words(150, ids(&[0, 50, 149]));
        let narrowed = all.intersect_row(&row);
        assert!(narrowed.len() <= all.len());
        assert!(narrowed.intersect_row(&row).len() <= narrowed.len());
    }

    #[test]
    fn empty_set() {
        let empty = CandidateSet::empty(10);
        assert!(empty.is_empty());
        assert!(empty.density().abs() < f64::EPSILON);
        assert_eq!(empty, CandidateSet::Dense(DenseSet::empty(10)));
    }

    #[test]
    fn last_word_of_universe_is_accepted() {
        let sparse = CandidateSet::from_words(3, ids(&[2, 0]));
        assert_eq!(sparse, CandidateSet::Dense(DenseSet::from_words(3, ids(&[0, 2]))));
        assert_eq!(sparse.into_dense().len(), 2);
    }

    #[test]
    #[should_panic(expected = "word #7 outside universe")]
    fn sparse_rejects_word_outside_universe() {
        let _ = CandidateSet::from_words(3, ids(&[0, 7]));
    }

    #[test]
    #[should_panic(expected = "word #7 outside universe")]
    fn dense_rejects_word_outside_universe() {
        let _ = DenseSet::from_words(3, ids(&[0, 7]));
    }
}
