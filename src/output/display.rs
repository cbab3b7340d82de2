//! Display functions for command results

use super::formatters::{format_seconds, hint_tiles, hint_to_emoji, information_bar};
use crate::commands::{AnalysisResult, EvaluationResult, SolveResult, StrategyReport};
use crate::index::CompatibilityIndex;
use crate::solver::{Solver, Strategy, StrategyNode};
use colored::Colorize;

fn header(title: &str, subject: Option<&str>) {
    println!("\n{}", "═".repeat(60).cyan());
    match subject {
        Some(subject) => println!(
            " {} {} ",
            title.bright_cyan().bold(),
            subject.to_uppercase().bright_yellow().bold()
        ),
        None => println!(" {} ", title.bright_cyan().bold()),
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print the result of solving a word
pub fn print_solve_result(solver: &Solver<'_>, result: &SolveResult, verbose: bool) {
    let codec = solver.codec();
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            hint_tiles(codec, &step.word, step.hint),
            hint_to_emoji(codec, step.hint)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Information: {:.3} bits", step.information_gain);
            match step.expected_turns {
                Some(turns) => println!("  Expected:    {turns:.3} turns"),
                None => println!("  Expected:    {}", "information-gain fallback".yellow()),
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    header("GUESS ANALYSIS:", Some(&result.word));

    let bar = information_bar(result.metrics.information_gain, result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Information: [{}] {}",
        bar.green(),
        format!(
            "{:.3} / {:.3} bits",
            result.metrics.information_gain, result.entropy
        )
        .bright_yellow()
    );
    println!("   Rank:        #{}", result.rank);
    println!("   Hint classes: {}", result.metrics.classes);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates",
        result.metrics.max_partition
    );
    println!(
        "   Candidate:   {}",
        if result.is_candidate { "yes" } else { "no" }
    );
    if let Some(turns) = result.expected_turns {
        println!(
            "   Exact:       {} expected turns",
            format!("{turns:.4}").bright_yellow().bold()
        );
    }
}

/// Print the result of evaluating a strategy
pub fn print_evaluation_result(result: &EvaluationResult) {
    header("STRATEGY EVALUATION", None);

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.4}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Tree expects:     {:.4}", result.expected_turns);
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!(
        "   Time taken:       {}",
        format_seconds(result.duration.as_secs_f64())
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = count as f64 / result.total_words as f64 * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.failures.is_empty() {
        println!(
            "\n{} {}",
            "❌ Unsolved:".red().bold(),
            result.failures.join(", ")
        );
    }
}

/// Print a strategy search report and the top of its tree
pub fn print_strategy_report(solver: &Solver<'_>, report: &StrategyReport, depth: usize) {
    header("OPTIMAL STRATEGY", None);

    println!(
        "\n   Candidates:  {}   Turns left: {}   Search: {}",
        report.candidates,
        report.turns_left,
        format_seconds(report.duration.as_secs_f64())
    );

    match &report.strategy {
        Strategy::Poisoned => {
            println!(
                "\n{}",
                "❌ No strategy solves every candidate within the turn limit and bound"
                    .red()
                    .bold()
            );
        }
        Strategy::Guess(node) => {
            println!(
                "   Best guess:  {}   Expected turns: {}   Nodes: {}   Depth: {}\n",
                solver
                    .vocabulary()
                    .guess_text(node.guess)
                    .to_uppercase()
                    .bright_yellow()
                    .bold(),
                format!("{:.4}", node.expected_turns).bright_green().bold(),
                node.node_count(),
                node.depth()
            );
            for line in tree_lines(solver, node, depth) {
                println!("{line}");
            }
        }
    }
}

/// Indented outline of `node`, `depth` levels deep
#[must_use]
pub fn tree_lines(solver: &Solver<'_>, node: &StrategyNode, depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    push_children(solver, node, depth, 1, &mut lines);
    lines
}

fn push_children(
    solver: &Solver<'_>,
    node: &StrategyNode,
    depth: usize,
    level: usize,
    lines: &mut Vec<String>,
) {
    if level > depth {
        return;
    }
    let codec = solver.codec();
    for (&hint, child) in &node.children {
        lines.push(format!(
            "{}{} → {} ({:.3})",
            "   ".repeat(level),
            hint_to_emoji(codec, hint),
            solver.vocabulary().guess_text(child.guess).to_uppercase(),
            child.expected_turns
        ));
        push_children(solver, child, depth, level + 1, lines);
    }
}

/// Print a summary of a loaded or built index
pub fn print_index_summary(index: &CompatibilityIndex) {
    header("COMPATIBILITY INDEX", None);
    println!("   Words:       {}", index.num_words());
    println!("   Guesses:     {}", index.num_guesses());
    println!("   Hints:       {}", index.codec().num_hints());
    println!("   Rows:        {}", index.row_count());
    println!("   Fingerprint: {:016x}", index.fingerprint());
}
