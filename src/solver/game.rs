//! Puzzle input and game outcome types

use super::Source;
use crate::core::{Pattern, Word};

/// One hangman puzzle: an identifier, the starting pattern, and the answer
///
/// The pattern is expected to agree with the target (see
/// [`crate::table::record`] for validation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub id: String,
    pub pattern: Pattern,
    pub target: Word,
}

impl Puzzle {
    #[must_use]
    pub fn new(id: impl Into<String>, pattern: Pattern, target: Word) -> Self {
        Self {
            id: id.into(),
            pattern,
            target,
        }
    }
}

/// Terminal state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Pattern equals the target
    Solved,
    /// No letter could be proposed before the target was revealed
    Stalled,
}

impl GameStatus {
    /// Status label written to the output table
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solved => "OK",
            Self::Stalled => "FAIL",
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// A single guess in a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub letter: char,
    pub source: Source,
    /// Cells revealed by this guess (0 for a miss)
    pub revealed: usize,
    pub pattern_after: Pattern,
}

impl GuessStep {
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        self.revealed > 0
    }
}

/// Result of solving one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub id: String,
    pub steps: Vec<GuessStep>,
    pub final_pattern: Pattern,
    pub status: GameStatus,
}

impl Outcome {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }

    /// Letters in the order they were guessed
    #[must_use]
    pub fn guesses(&self) -> Vec<char> {
        self.steps.iter().map(|step| step.letter).collect()
    }

    /// Guessed letters joined with `separator`
    #[must_use]
    pub fn guess_sequence(&self, separator: &str) -> String {
        self.steps
            .iter()
            .map(|step| step.letter.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.status.is_success()
    }
}
