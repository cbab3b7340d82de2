//! Command implementations

pub mod analyze;
pub mod evaluate;
pub mod simple;
pub mod solve;
pub mod strategy;

pub use analyze::{AnalysisResult, analyze_word};
pub use evaluate::{EvaluationResult, evaluate_strategy};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, solve_word};
pub use strategy::{
    ExportedNode, StrategyReport, compute_strategy, export_tree, import_tree, load_tree, save_tree,
};

use crate::core::{ABSENT, CORRECT, CandidateSet, GuessId, Hint, MISPLACED};
use crate::solver::Solver;
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar in the house style
#[must_use]
pub fn progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map(|style| style.progress_chars("█▓▒░"))
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message(message.to_string());
    pb
}

/// Normalize user feedback into the `b`/`y`/`g` alphabet
///
/// Accepts any case, `-`, `_` and `.` for absent letters, and the colored
/// square emoji.
///
/// # Examples
/// ```
/// use wordle_strategy::commands::normalize_feedback;
///
/// assert_eq!(normalize_feedback("G-Y_."), "gbybb");
/// assert_eq!(normalize_feedback("🟩🟨⬜⬛🟩"), "gybbg");
/// ```
#[must_use]
pub fn normalize_feedback(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            '-' | '_' | '.' | '⬜' | '⬛' => ABSENT,
            '🟨' => MISPLACED,
            '🟩' => CORRECT,
            other => other,
        })
        .collect()
}

/// Parse `guess:hint` pairs, such as `crane:bbygb`
///
/// # Errors
/// Returns an error for a malformed entry, an unknown guess or an invalid hint.
pub fn parse_history(solver: &Solver<'_>, entries: &[String]) -> Result<Vec<(GuessId, Hint)>> {
    entries
        .iter()
        .map(|entry| {
            let Some((guess, hint)) = entry.split_once([':', '=']) else {
                bail!("expected GUESS:HINT, got '{entry}'");
            };
            let guess = solver.vocabulary().guess_id(guess)?;
            let hint = solver
                .display_string_to_hint(&normalize_feedback(hint))
                .with_context(|| format!("in history entry '{entry}'"))?;
            Ok((guess, hint))
        })
        .collect()
}

/// Candidates left after replaying `history` from the full solution set
#[must_use]
pub fn replay(solver: &Solver<'_>, history: &[(GuessId, Hint)]) -> CandidateSet {
    history
        .iter()
        .fold(solver.all_candidates(), |candidates, &(guess, hint)| {
            solver.narrow(&candidates, guess, hint)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Vocabulary, WordSet};
    use crate::index::CompatibilityIndex;
    use crate::solver::SearchConfig;

    #[test]
    fn feedback_aliases() {
        assert_eq!(normalize_feedback(" GYB-_ "), "gybbb");
        assert_eq!(normalize_feedback("g y b"), "gyb");
        assert_eq!(normalize_feedback("xyz"), "xyz");
    }

    #[test]
    fn history_parsing_and_replay() {
        let vocab = Vocabulary::new(
            &["aaaaa", "bbbbb", "ccccc"],
            &["aaabb", "ddddd"],
        )
        .unwrap();
        let index = CompatibilityIndex::build(&vocab);
        let solver = Solver::new(&vocab, &index, SearchConfig::default()).unwrap();

        let history = parse_history(&solver, &["AAABB:GGG--".to_string()]).unwrap();
        assert_eq!(history.len(), 1);
        let candidates = replay(&solver, &history);
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains(vocab.word_id("aaaaa").unwrap()));

        assert!(parse_history(&solver, &["aaabb".to_string()]).is_err());
        assert!(parse_history(&solver, &["zzzzz:bbbbb".to_string()]).is_err());
        assert!(parse_history(&solver, &["aaabb:bbxbb".to_string()]).is_err());
    }
}
