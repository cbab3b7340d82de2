//! Sorted index list over the word index space

use super::{DenseSet, WordSet};
use crate::core::WordId;

/// Explicit ascending list of surviving word indices
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SparseSet {
    universe: usize,
    words: Vec<WordId>,
}

impl SparseSet {
    #[must_use]
    pub const fn empty(universe: usize) -> Self {
        Self {
            universe,
            words: Vec::new(),
        }
    }

    /// Build from arbitrary indices; duplicates are removed
    ///
    /// # Panics
    /// Panics if any word is outside the universe
    #[must_use]
    pub fn from_words<I: IntoIterator<Item = WordId>>(universe: usize, words: I) -> Self {
        let mut words: Vec<WordId> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        if let Some(&word) = words.last() {
            assert!(word.index() < universe, "word {word} outside universe");
        }
        Self { universe, words }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[WordId] {
        &self.words
    }
}

impl WordSet for SparseSet {
    fn universe(&self) -> usize {
        self.universe
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn contains(&self, word: WordId) -> bool {
        self.words.binary_search(&word).is_ok()
    }

    fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        self.words.iter().copied()
    }

    fn intersect_row(&self, row: &DenseSet) -> Self {
        Self {
            universe: self.universe,
            words: self
                .words
                .iter()
                .copied()
                .filter(|&w| row.contains(w))
                .collect(),
        }
    }

    fn count_in_row(&self, row: &DenseSet) -> usize {
        self.words.iter().filter(|&&w| row.contains(w)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_sorts_and_dedups() {
        let set = SparseSet::from_words(10, [7, 2, 7, 0].map(WordId::new));
        assert_eq!(set.as_slice(), &[0, 2, 7].map(WordId::new));
        assert!(set.contains(WordId::new(2)));
        assert!(!set.contains(WordId::new(3)));
    }

    #[test]
    fn intersect_with_dense_row() {
        let set = SparseSet::from_words(100, [1, 10, 50, 99].map(WordId::new));
        let row = DenseSet::from_words(100, [10, 11, 99].map(WordId::new));

        let narrowed = set.intersect_row(&row);
        assert_eq!(narrowed.as_slice(), &[10, 99].map(WordId::new));
        assert_eq!(set.count_in_row(&row), 2);
        assert_eq!(narrowed.universe(), 100);
    }
}
