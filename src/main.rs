//! Wordle Strategy - CLI
//!
//! Computes, explores and plays optimal expected-turns Wordle strategies.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use std::path::PathBuf;
use wordle_strategy::{
    commands::{
        analyze_word, compute_strategy, evaluate_strategy, load_tree, parse_history, run_simple,
        save_tree, solve_word,
    },
    core::{DEFAULT_SPARSITY_THRESHOLD, Vocabulary},
    index::CompatibilityIndex,
    output::{
        print_analysis_result, print_evaluation_result, print_index_summary, print_solve_result,
        print_strategy_report,
    },
    solver::{DEFAULT_TURN_LIMIT, InformationMode, SearchConfig, Solver},
    wordlists,
};

#[derive(Parser)]
#[command(
    name = "wordle_strategy",
    about = "Optimal expected-turns Wordle strategies by branch-and-bound search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solution word list: one word per line, comma separated, or a JSON array
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Additional legal guesses (same formats as --solutions)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Use every word over ALPHABET instead of word list files
    #[arg(long, global = true, conflicts_with = "solutions")]
    synthetic: Option<String>,

    /// Word length for --synthetic
    #[arg(long, global = true, default_value_t = 5)]
    length: usize,

    /// Compatibility index cache file, built on first use
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Guesses available per game
    #[arg(long, global = true, default_value_t = DEFAULT_TURN_LIMIT)]
    turn_limit: u32,

    /// Give up on strategies expecting more turns than this
    #[arg(long, global = true, value_parser = parse_bound)]
    bound: Option<f64>,

    /// Density below which candidate sets switch to the sparse form
    #[arg(long, global = true, default_value_t = DEFAULT_SPARSITY_THRESHOLD)]
    sparsity: f64,

    /// Disable branch-and-bound pruning (exhaustive search)
    #[arg(long, global = true)]
    no_prune: bool,

    /// Evaluate opening guesses on one thread
    #[arg(long, global = true)]
    serial: bool,

    /// Estimate information gain from sampled words (default 1000 samples)
    #[arg(long, global = true, num_args = 0..=1, value_name = "N")]
    samples: Option<Option<usize>>,

    /// Seed for --samples
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (interactive assistant, default)
    Simple,

    /// Compute the optimal strategy for the current position
    Strategy {
        /// Guesses already played, as GUESS:HINT (e.g. crane:bbygb)
        #[arg(long = "after", value_name = "GUESS:HINT")]
        history: Vec<String>,

        /// Write the full tree to this file as RON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Levels of the tree to print
        #[arg(short, long, default_value_t = 1)]
        depth: usize,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Follow a tree written by `strategy --output`
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Show candidate counts and expectations for every turn
        #[arg(short, long)]
        details: bool,
    },

    /// Play every solution through the optimal (or a saved) strategy
    Evaluate {
        /// Evaluate a tree written by `strategy --output` instead of searching
        #[arg(long)]
        plan: Option<PathBuf>,
    },

    /// Analyze a specific guess
    Analyze {
        /// Guess to analyze
        word: String,

        /// Guesses already played, as GUESS:HINT
        #[arg(long = "after", value_name = "GUESS:HINT")]
        history: Vec<String>,

        /// Also compute the exact expected turns of opening with the word
        #[arg(long)]
        exact: bool,
    },

    /// Build the compatibility index and write it to --cache
    Index {
        /// Rebuild even if the cache is valid
        #[arg(long)]
        force: bool,
    },
}

/// Parse `--bound`, rejecting NaN
fn parse_bound(text: &str) -> Result<f64, String> {
    let bound: f64 = text.parse().map_err(|e| format!("{e}"))?;
    if bound.is_nan() {
        return Err("bound must be a number".to_string());
    }
    Ok(bound)
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        let information = match self.samples {
            None => InformationMode::Exact,
            Some(None) => InformationMode::sampled(self.seed),
            Some(Some(samples)) => InformationMode::Sampled {
                samples,
                seed: self.seed,
            },
        };

        SearchConfig {
            turn_limit: self.turn_limit,
            bound: self.bound.unwrap_or(f64::INFINITY),
            sparsity_threshold: self.sparsity,
            pruning: !self.no_prune,
            parallel: !self.serial,
            information,
            ..SearchConfig::default()
        }
    }

    fn load_vocabulary(&self) -> Result<Vocabulary> {
        match (&self.solutions, &self.synthetic) {
            (Some(path), _) => wordlists::load_vocabulary(path, self.guesses.as_deref())
                .with_context(|| format!("loading word lists from {}", path.display())),
            (None, Some(alphabet)) => Ok(Vocabulary::synthetic(alphabet, self.length)?),
            (None, None) => bail!("no word list given: pass --solutions FILE or --synthetic ALPHABET"),
        }
    }

    fn load_index(&self, vocab: &Vocabulary) -> Result<CompatibilityIndex> {
        match &self.cache {
            Some(path) => CompatibilityIndex::load_or_build(path, vocab)
                .with_context(|| format!("loading index cache {}", path.display())),
            None => Ok(CompatibilityIndex::build(vocab)),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let vocab = cli.load_vocabulary()?;

    if let Some(Commands::Index { force }) = &cli.command {
        return run_index_command(&cli, &vocab, *force);
    }

    let index = cli.load_index(&vocab)?;
    let solver = Solver::new(&vocab, &index, cli.search_config())?;

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&solver),
        Commands::Strategy {
            history,
            output,
            depth,
        } => run_strategy_command(&solver, &history, output, depth),
        Commands::Solve {
            word,
            plan,
            details,
        } => {
            let plan = plan.map(|path| load_tree(&solver, &path)).transpose()?;
            let result = solve_word(&solver, &word, plan)?;
            print_solve_result(&solver, &result, details);
            Ok(())
        }
        Commands::Evaluate { plan } => run_evaluate_command(&solver, plan),
        Commands::Analyze {
            word,
            history,
            exact,
        } => {
            let history = parse_history(&solver, &history)?;
            let result = analyze_word(&solver, &word, &history, exact)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Index { .. } => Ok(()),
    }
}

fn run_strategy_command(
    solver: &Solver<'_>,
    history: &[String],
    output: Option<PathBuf>,
    depth: usize,
) -> Result<()> {
    let history = parse_history(solver, history)?;
    let report = compute_strategy(solver, &history, true)?;
    print_strategy_report(solver, &report, depth);

    if let (Some(path), Some(node)) = (output, report.strategy.node()) {
        save_tree(solver, node, &path)?;
        println!("\n💾 Strategy written to {}", path.display());
    }
    Ok(())
}

fn run_evaluate_command(solver: &Solver<'_>, plan: Option<PathBuf>) -> Result<()> {
    let plan = match plan {
        Some(path) => load_tree(solver, &path)?,
        None => {
            println!("Searching for the optimal strategy...");
            let report = compute_strategy(solver, &[], true)?;
            match report.strategy.into_node() {
                Some(node) => node,
                None => bail!(
                    "no strategy solves every word within {} turns",
                    solver.config().turn_limit
                ),
            }
        }
    };

    let result = evaluate_strategy(solver, &plan, true);
    print_evaluation_result(&result);
    Ok(())
}

fn run_index_command(cli: &Cli, vocab: &Vocabulary, force: bool) -> Result<()> {
    let Some(path) = &cli.cache else {
        bail!("the index command needs --cache FILE");
    };

    if force && path.exists() {
        std::fs::remove_file(path).with_context(|| format!("removing {}", path.display()))?;
    }

    let index = cli.load_index(vocab)?;
    print_index_summary(&index);
    println!("\n{} {}", "💾 Cached at".green(), path.display());
    Ok(())
}
