//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_evaluation_result, print_index_summary, print_solve_result,
    print_strategy_report, tree_lines,
};
