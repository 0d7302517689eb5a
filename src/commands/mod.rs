//! Command implementations

pub mod batch;
pub mod solve;
pub mod suggest;

pub use batch::{BatchConfig, BatchReport, BatchStatistics, run_batch};
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
pub use suggest::{SuggestionReport, suggest_letters};
