//! Single puzzle solving command
//!
//! Validates one pattern/target pair and returns the full guess trace.

use crate::core::{DEFAULT_WILDCARD, Pattern, Word};
use crate::solver::{Outcome, Solver, Strategy};
use crate::table::{RecordError, validate_record};

/// Configuration for solving one puzzle
pub struct SolveConfig {
    pub id: String,
    pub pattern: String,
    pub target: String,
    pub wildcard: char,
}

impl SolveConfig {
    #[must_use]
    pub fn new(pattern: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: "cli".to_string(),
            pattern: pattern.into(),
            target: target.into(),
            wildcard: DEFAULT_WILDCARD,
        }
    }
}

/// Result of solving one puzzle
pub struct SolveResult {
    pub initial: Pattern,
    pub target: Word,
    pub outcome: Outcome,
}

/// Solve a single puzzle with the given solver
///
/// # Errors
///
/// Returns a `RecordError` if the pattern and target are inconsistent.
pub fn solve_puzzle<S: Strategy>(
    config: &SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, RecordError> {
    let puzzle = validate_record(
        &[
            config.id.as_str(),
            config.pattern.as_str(),
            config.target.as_str(),
        ],
        config.wildcard,
    )?;
    let outcome = solver.solve(&puzzle);

    Ok(SolveResult {
        initial: puzzle.pattern,
        target: puzzle.target,
        outcome,
    })
}
