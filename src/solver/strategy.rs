//! Strategy decision trees
//!
//! A [`StrategyNode`] names the guess to play and, for every hint that leaves
//! at least one word alive, the sub-strategy to follow next. A search that
//! cannot meet its turn limit or bound returns [`Strategy::Poisoned`].

use crate::core::{GuessId, Hint, WordId};
use crate::index::CompatibilityIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One decision point of a strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyNode {
    pub guess: GuessId,
    /// Expected guesses to win from here, counting this one
    pub expected_turns: f64,
    /// Follow-up plans keyed by the hint received; the all-correct hint has none
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<Hint, StrategyNode>,
}

impl StrategyNode {
    /// A guess that is certain to be correct
    #[must_use]
    pub const fn leaf(guess: GuessId) -> Self {
        Self {
            guess,
            expected_turns: 1.0,
            children: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn child(&self, hint: Hint) -> Option<&Self> {
        self.children.get(&hint)
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the tree rooted here
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Self::node_count).sum::<usize>()
    }

    /// Longest chain of guesses from this node, counting this one
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.values().map(Self::depth).max().unwrap_or(0)
    }

    /// Guesses needed to find `word` by following this tree
    ///
    /// Returns `None` if the tree has no branch for a hint the word produces.
    #[must_use]
    pub fn turns_to_solve(&self, word: WordId, index: &CompatibilityIndex) -> Option<u32> {
        let codec = index.codec();
        let mut node = self;
        let mut turns = 1;
        loop {
            let hint = index.hint(word, node.guess);
            if codec.is_all_correct(hint) {
                return Some(turns);
            }
            node = node.child(hint)?;
            turns += 1;
        }
    }
}

/// Result of a strategy search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// No strategy exists within the turn limit and bound
    Poisoned,
    Guess(StrategyNode),
}

impl Strategy {
    #[must_use]
    pub const fn is_poisoned(&self) -> bool {
        matches!(self, Self::Poisoned)
    }

    #[must_use]
    pub const fn node(&self) -> Option<&StrategyNode> {
        match self {
            Self::Poisoned => None,
            Self::Guess(node) => Some(node),
        }
    }

    #[must_use]
    pub fn into_node(self) -> Option<StrategyNode> {
        match self {
            Self::Poisoned => None,
            Self::Guess(node) => Some(node),
        }
    }

    #[must_use]
    pub fn guess(&self) -> Option<GuessId> {
        self.node().map(|node| node.guess)
    }

    /// Expected turns of the root, infinite when poisoned
    #[must_use]
    pub fn expected_turns(&self) -> f64 {
        self.node().map_or(f64::INFINITY, |node| node.expected_turns)
    }
}
