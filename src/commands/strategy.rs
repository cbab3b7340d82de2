//! Optimal strategy command
//!
//! Computes the decision tree for the current position and converts it to and
//! from a word-based form that can be written to disk.

use super::{progress_bar, replay};
use crate::core::{GuessId, Hint, WordSet};
use crate::solver::{Solver, Strategy, StrategyNode};
use anyhow::{Context, Result, bail};
use log::info;
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of a strategy search
pub struct StrategyReport {
    pub candidates: usize,
    pub turns_left: u32,
    pub strategy: Strategy,
    pub duration: Duration,
}

/// A strategy node with guesses and hints spelled out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNode {
    pub guess: String,
    pub expected_turns: f64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, ExportedNode>,
}

/// Search for the optimal strategy after `history`
///
/// # Errors
/// Returns an error if the search hits an index invariant violation.
pub fn compute_strategy(
    solver: &Solver<'_>,
    history: &[(GuessId, Hint)],
    show_progress: bool,
) -> Result<StrategyReport> {
    let candidates = replay(solver, history);
    let used = u32::try_from(history.len()).unwrap_or(u32::MAX);
    let turns_left = solver.config().turn_limit.saturating_sub(used);

    info!(
        "Searching {} candidates with {} guesses, {turns_left} turns left",
        candidates.len(),
        solver.guesses().len()
    );

    let mut search = solver.search(solver.guesses());
    if show_progress && candidates.len() > 2 {
        search = search.with_progress(progress_bar(
            solver.guesses().len() as u64,
            "Evaluating opening guesses",
        ));
    }

    let start = Instant::now();
    let strategy = search.find_optimal_strategy(&candidates, turns_left, solver.config().bound)?;

    Ok(StrategyReport {
        candidates: candidates.len(),
        turns_left,
        strategy,
        duration: start.elapsed(),
    })
}

/// Convert a tree to its word-based form
#[must_use]
pub fn export_tree(solver: &Solver<'_>, node: &StrategyNode) -> ExportedNode {
    ExportedNode {
        guess: solver.vocabulary().guess_text(node.guess).to_string(),
        expected_turns: node.expected_turns,
        children: node
            .children
            .iter()
            .map(|(&hint, child)| (solver.hint_to_display_string(hint), export_tree(solver, child)))
            .collect(),
    }
}

/// Convert a word-based tree back, validating every guess and hint
///
/// # Errors
/// Returns an error if a guess is not in the vocabulary or a hint is malformed.
pub fn import_tree(solver: &Solver<'_>, node: &ExportedNode) -> Result<StrategyNode> {
    let guess = solver.vocabulary().guess_id(&node.guess)?;
    let mut children = BTreeMap::new();
    for (hint, child) in &node.children {
        let hint = solver.display_string_to_hint(hint)?;
        if solver.codec().is_all_correct(hint) {
            bail!("'{}' has a follow-up for the all-correct hint", node.guess);
        }
        children.insert(hint, import_tree(solver, child)?);
    }
    Ok(StrategyNode {
        guess,
        expected_turns: node.expected_turns,
        children,
    })
}

/// Write a tree as pretty RON
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn save_tree(solver: &Solver<'_>, node: &StrategyNode, path: &Path) -> Result<()> {
    let text = ron::ser::to_string_pretty(&export_tree(solver, node), PrettyConfig::default())
        .context("serializing strategy")?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote strategy to {}", path.display());
    Ok(())
}

/// Read a tree written by [`save_tree`]
///
/// # Errors
/// Returns an error if the file cannot be read or does not match the vocabulary.
pub fn load_tree(solver: &Solver<'_>, path: &Path) -> Result<StrategyNode> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let exported: ExportedNode =
        ron::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    import_tree(solver, &exported)
}
