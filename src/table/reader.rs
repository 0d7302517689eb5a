//! Puzzle table reading
//!
//! Reads `identifier, pattern, target` rows from CSV. The first row is skipped
//! when it looks like a header. Invalid rows are collected, not fatal. Blank
//! lines count as rows with no columns, so row numbers follow the source lines.

use super::record::{RecordError, RejectedRow, validate_record};
use crate::solver::Puzzle;
use anyhow::{Context, Result, bail};
use csv::{Position, ReaderBuilder, StringRecord};
use log::{info, warn};
use std::fs::File;
use std::io;
use std::path::Path;

/// Rows read from one input table
#[derive(Debug, Default)]
pub struct PuzzleTable {
    pub puzzles: Vec<Puzzle>,
    pub rejected: Vec<RejectedRow>,
}

impl PuzzleTable {
    fn next_row(&self) -> usize {
        self.puzzles.len() + self.rejected.len() + 1
    }

    fn reject(&mut self, error: RecordError) {
        let row = self.next_row();
        warn!("Skipping row {row}: {error}");
        self.rejected.push(RejectedRow { row, error });
    }

    fn accept(&mut self, record: &StringRecord, wildcard: char) {
        let columns: Vec<&str> = record.iter().collect();
        match validate_record(&columns, wildcard) {
            Ok(puzzle) => self.puzzles.push(puzzle),
            Err(error) => self.reject(error),
        }
    }

    fn reject_blank_lines(&mut self, count: u64) {
        for _ in 0..count {
            self.reject(RecordError::TooFewColumns(0));
        }
    }
}

/// Tracks source lines so blank lines skipped by the csv reader still count
#[derive(Debug)]
struct LineTracker {
    next_line: u64,
}

impl LineTracker {
    const fn new() -> Self {
        Self { next_line: 1 }
    }

    /// Number of blank lines between the previous record and `record`
    fn blank_lines_before(&mut self, record: &StringRecord) -> u64 {
        let Some(start) = record.position().map(Position::line) else {
            return 0;
        };
        let embedded_breaks: usize = record
            .iter()
            .map(|field| field.matches('\n').count())
            .sum();
        let blank = start.saturating_sub(self.next_line);
        self.next_line = start + 1 + embedded_breaks as u64;
        blank
    }
}

/// True if the row looks like a column header rather than a puzzle
#[must_use]
pub fn looks_like_header(record: &StringRecord) -> bool {
    let text = record
        .iter()
        .map(|column| column.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join(",");

    (text.contains("game_id") && text.contains("pattern"))
        || text.contains("cuvant_tinta")
        || text.contains("id_joc")
}

/// Read puzzles from CSV data
///
/// # Errors
///
/// Returns an error if the data has no rows at all or is not readable CSV.
pub fn read_puzzles<R: io::Read>(reader: R, wildcard: char) -> Result<PuzzleTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv_reader.records();

    let Some(first) = records.next() else {
        bail!("Input table is empty");
    };
    let first = first.context("Failed to read first row")?;

    let mut table = PuzzleTable::default();
    let mut lines = LineTracker::new();
    let leading_blanks = lines.blank_lines_before(&first);
    if leading_blanks > 0 || !looks_like_header(&first) {
        table.reject_blank_lines(leading_blanks);
        table.accept(&first, wildcard);
    }
    for record in records {
        let record = record.context("Failed to read row")?;
        table.reject_blank_lines(lines.blank_lines_before(&record));
        table.accept(&record, wildcard);
    }

    info!(
        "Read {} puzzles ({} rows rejected)",
        table.puzzles.len(),
        table.rejected.len()
    );
    Ok(table)
}

/// Read puzzles from a CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read (see [`read_puzzles`]).
pub fn read_puzzles_from_path<P: AsRef<Path>>(path: P, wildcard: char) -> Result<PuzzleTable> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open input {}", path.display()))?;
    read_puzzles(file, wildcard).with_context(|| format!("Failed to read {}", path.display()))
}
