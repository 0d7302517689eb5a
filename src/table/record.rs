//! Puzzle row validation
//!
//! Turns the raw columns of one input row into a [`Puzzle`], or explains why
//! the row cannot be played.

use crate::core::{Pattern, Word, normalize};
use crate::solver::Puzzle;
use std::fmt;

/// Minimum number of columns: identifier, pattern, target
pub const REQUIRED_COLUMNS: usize = 3;

/// Reason a row was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    TooFewColumns(usize),
    MissingFields,
    LengthMismatch { pattern: usize, target: usize },
    LetterMismatch { position: usize, pattern: char, target: char },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewColumns(count) => {
                write!(f, "Row has {count} columns, expected at least {REQUIRED_COLUMNS}")
            }
            Self::MissingFields => write!(f, "Missing required fields"),
            Self::LengthMismatch { pattern, target } => write!(
                f,
                "Pattern has {pattern} letters but target word has {target}"
            ),
            Self::LetterMismatch {
                position,
                pattern,
                target,
            } => write!(
                f,
                "Pattern letter '{pattern}' at position {position} does not match target letter '{target}'"
            ),
        }
    }
}

impl std::error::Error for RecordError {}

/// A row that could not be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub error: RecordError,
}

/// Validate the columns of one row and build the puzzle
///
/// Columns beyond the third are ignored. Every field is normalized first.
///
/// # Errors
///
/// Returns a `RecordError` if the row has too few columns, a field is empty,
/// the pattern and target differ in length, or a revealed pattern letter
/// disagrees with the target.
///
/// # Examples
/// ```
/// use hangman_solver::table::record::{RecordError, validate_record};
///
/// let puzzle = validate_record(&["g1", "*AT", "cat"], '*').unwrap();
/// assert_eq!(puzzle.pattern.to_string(), "*at");
///
/// assert_eq!(
///     validate_record(&["g2", "*a", "cat"], '*'),
///     Err(RecordError::LengthMismatch { pattern: 2, target: 3 })
/// );
/// ```
pub fn validate_record<S: AsRef<str>>(columns: &[S], wildcard: char) -> Result<Puzzle, RecordError> {
    let [id, pattern, target, ..] = columns else {
        return Err(RecordError::TooFewColumns(columns.len()));
    };

    let id = normalize(id.as_ref());
    if id.is_empty() {
        return Err(RecordError::MissingFields);
    }
    let pattern =
        Pattern::parse(pattern.as_ref(), wildcard).map_err(|_| RecordError::MissingFields)?;
    let target = Word::new(target.as_ref()).map_err(|_| RecordError::MissingFields)?;

    if pattern.len() != target.len() {
        return Err(RecordError::LengthMismatch {
            pattern: pattern.len(),
            target: target.len(),
        });
    }

    for (i, (cell, &letter)) in pattern.cells().iter().zip(target.chars()).enumerate() {
        if let Some(known) = *cell
            && known != letter
        {
            return Err(RecordError::LetterMismatch {
                position: i + 1,
                pattern: known,
                target: letter,
            });
        }
    }

    Ok(Puzzle::new(id, pattern, target))
}
