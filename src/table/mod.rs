//! Tabular puzzle input and outcome output
//!
//! CSV in, CSV out. Row validation lives here so the solver only ever sees
//! consistent puzzles.

pub mod reader;
pub mod record;
pub mod writer;

pub use reader::{PuzzleTable, looks_like_header, read_puzzles, read_puzzles_from_path};
pub use record::{RecordError, RejectedRow, validate_record};
pub use writer::{OUTCOME_HEADER, write_outcomes, write_outcomes_to_path};
