//! Batch solving - every puzzle of an input table
//!
//! Runs the solver over all puzzles and aggregates the run statistics.

use crate::solver::{Outcome, Puzzle, Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How a batch is executed
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    /// Solve puzzles on the rayon thread pool
    pub parallel: bool,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            show_progress: true,
        }
    }
}

/// Statistics over all outcomes of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub max_guesses: usize,
    /// Game with the most guesses (first one on ties)
    pub hardest: Option<(String, usize)>,
    /// Guess count -> number of games
    pub guess_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl BatchStatistics {
    #[must_use]
    pub fn from_outcomes(outcomes: &[Outcome], duration: Duration) -> Self {
        let total_games = outcomes.len();
        let solved = outcomes.iter().filter(|o| o.is_solved()).count();
        let total_guesses: usize = outcomes.iter().map(Outcome::guess_count).sum();

        let mut guess_distribution = BTreeMap::new();
        let mut hardest: Option<(String, usize)> = None;
        for outcome in outcomes {
            let guesses = outcome.guess_count();
            *guess_distribution.entry(guesses).or_insert(0) += 1;
            if hardest.as_ref().is_none_or(|(_, most)| guesses > *most) {
                hardest = Some((outcome.id.clone(), guesses));
            }
        }

        let average_guesses = if total_games > 0 {
            total_guesses as f64 / total_games as f64
        } else {
            0.0
        };

        Self {
            total_games,
            solved,
            failed: total_games - solved,
            total_guesses,
            average_guesses,
            max_guesses: hardest.as_ref().map_or(0, |(_, n)| *n),
            hardest,
            guess_distribution,
            duration,
        }
    }
}

/// Outcomes in input order, plus their statistics
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
    pub statistics: BatchStatistics,
}

/// Solve every puzzle
///
/// Games share only the solver (and through it the immutable lexicon and
/// alphabet), so they run in parallel unless `config.parallel` is off. Outcomes
/// are returned in input order either way.
pub fn run_batch<S: Strategy + Sync>(
    solver: &Solver<S>,
    puzzles: &[Puzzle],
    config: &BatchConfig,
) -> BatchReport {
    info!(
        "Solving {} puzzles ({})",
        puzzles.len(),
        if config.parallel { "parallel" } else { "sequential" }
    );

    let pb = if config.show_progress {
        ProgressBar::new(puzzles.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let solve = |puzzle: &Puzzle| {
        let outcome = solver.solve(puzzle);
        pb.inc(1);
        outcome
    };

    let outcomes: Vec<Outcome> = if config.parallel {
        puzzles.par_iter().map(solve).collect()
    } else {
        puzzles.iter().map(solve).collect()
    };

    pb.finish_with_message("Complete!");

    let statistics = BatchStatistics::from_outcomes(&outcomes, start.elapsed());
    info!(
        "Solved {}/{} puzzles with {} guesses",
        statistics.solved, statistics.total_games, statistics.total_guesses
    );

    BatchReport {
        outcomes,
        statistics,
    }
}
