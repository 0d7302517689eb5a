//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_statistics, print_rejected_rows, print_solve_result, print_suggestion,
};
