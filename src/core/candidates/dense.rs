//! Fixed-size bit-vector over the word index space

use super::WordSet;
use crate::core::WordId;
use serde::{Deserialize, Serialize};

const BLOCK_BITS: usize = u64::BITS as usize;

/// Bit-vector word set with one bit per word in the universe
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DenseSet {
    universe: usize,
    blocks: Vec<u64>,
}

impl DenseSet {
    #[must_use]
    pub fn empty(universe: usize) -> Self {
        Self {
            universe,
            blocks: vec![0; universe.div_ceil(BLOCK_BITS)],
        }
    }

    /// Set containing every word of the universe
    #[must_use]
    pub fn full(universe: usize) -> Self {
        let mut blocks = vec![u64::MAX; universe.div_ceil(BLOCK_BITS)];
        let tail = universe % BLOCK_BITS;
        if tail != 0
            && let Some(last) = blocks.last_mut()
        {
            *last = (1u64 << tail) - 1;
        }
        Self { universe, blocks }
    }

    #[must_use]
    pub fn from_words<I: IntoIterator<Item = WordId>>(universe: usize, words: I) -> Self {
        let mut set = Self::empty(universe);
        for word in words {
            set.insert(word);
        }
        set
    }

    /// # Panics
    /// Panics if `word` is outside the universe
    #[inline]
    pub fn insert(&mut self, word: WordId) {
        let index = word.index();
        assert!(index < self.universe, "word {word} outside universe");
        self.blocks[index / BLOCK_BITS] |= 1 << (index % BLOCK_BITS);
    }

    /// Raw 64-bit blocks, lowest word index in the lowest bit
    #[must_use]
    pub fn blocks(&self) -> &[u64] {
        &self.blocks
    }

    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        debug_assert_eq!(self.universe, other.universe);
        Self {
            universe: self.universe,
            blocks: self
                .blocks
                .iter()
                .zip(&other.blocks)
                .map(|(a, b)| a & b)
                .collect(),
        }
    }

    /// Size of the intersection without materializing it
    #[must_use]
    pub fn intersection_len(&self, other: &Self) -> usize {
        self.blocks
            .iter()
            .zip(&other.blocks)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }
}

impl WordSet for DenseSet {
    fn universe(&self) -> usize {
        self.universe
    }

    fn len(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[inline]
    fn contains(&self, word: WordId) -> bool {
        let index = word.index();
        index < self.universe && self.blocks[index / BLOCK_BITS] & (1 << (index % BLOCK_BITS)) != 0
    }

    fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        DenseIter::new(&self.blocks)
    }

    fn intersect_row(&self, row: &DenseSet) -> Self {
        self.intersect(row)
    }

    fn count_in_row(&self, row: &DenseSet) -> usize {
        self.intersection_len(row)
    }
}

/// Ascending iterator over the set bits of a [`DenseSet`]
#[derive(Debug, Clone)]
pub struct DenseIter<'a> {
    blocks: &'a [u64],
    block_index: usize,
    current: u64,
}

impl<'a> DenseIter<'a> {
    pub(crate) fn new(blocks: &'a [u64]) -> Self {
        Self {
            blocks,
            block_index: 0,
            current: blocks.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for DenseIter<'_> {
    type Item = WordId;

    fn next(&mut self) -> Option<WordId> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(WordId::new((self.block_index * BLOCK_BITS + bit) as u32));
            }
            self.block_index += 1;
            self.current = *self.blocks.get(self.block_index)?;
        }
    }
}
