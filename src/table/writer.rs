//! Outcome table writing

use crate::solver::Outcome;
use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::io;
use std::path::Path;

/// Column names of the outcome table
pub const OUTCOME_HEADER: [&str; 5] = [
    "game_id",
    "total_guesses",
    "found_word",
    "status",
    "guess_sequence",
];

/// Separator between guessed letters in the `guess_sequence` column
pub const GUESS_SEPARATOR: &str = " ";

/// Write one row per outcome, in order, after a header row
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_outcomes<W: io::Write>(writer: W, outcomes: &[Outcome]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(OUTCOME_HEADER)?;

    for outcome in outcomes {
        let guesses = outcome.guess_count().to_string();
        let found = outcome.final_pattern.to_string();
        let sequence = outcome.guess_sequence(GUESS_SEPARATOR);
        csv_writer.write_record([
            outcome.id.as_str(),
            guesses.as_str(),
            found.as_str(),
            outcome.status.label(),
            sequence.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the outcome table to a file, replacing it if it exists
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_outcomes_to_path<P: AsRef<Path>>(path: P, outcomes: &[Outcome]) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("Failed to create output {}", path.display()))?;
    write_outcomes(file, outcomes).with_context(|| format!("Failed to write {}", path.display()))
}
