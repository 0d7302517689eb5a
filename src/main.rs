//! Hangman Solver - CLI
//!
//! Solves hangman puzzles in batch from a CSV table, or one at a time with a
//! full guess trace.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{BatchConfig, SolveConfig, run_batch, solve_puzzle, suggest_letters},
    core::{Alphabet, DEFAULT_WILDCARD},
    lexicon::{Lexicon, loader::load_or_empty},
    output::{print_batch_statistics, print_rejected_rows, print_solve_result, print_suggestion},
    solver::{Solver, StrategyType},
    table::{read_puzzles_from_path, write_outcomes_to_path},
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver using lexicon letter frequencies and linguistic heuristics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Lexicon file, one word per line (if missing, only the heuristic order is used)
    #[arg(short, long, global = true)]
    lexicon: Option<PathBuf>,

    /// Strategy: lexicon (default) or heuristic
    #[arg(short, long, global = true, default_value = "lexicon")]
    strategy: String,

    /// Character marking unrevealed letters in patterns
    #[arg(short, long, global = true, default_value_t = DEFAULT_WILDCARD)]
    wildcard: char,

    /// Log level: error, warn, info, debug, trace (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every puzzle of a CSV table (id, pattern, target) and write the outcomes
    Batch {
        /// Input CSV with puzzles
        input: PathBuf,

        /// Output CSV for outcomes
        output: PathBuf,

        /// Solve puzzles one after another on a single thread
        #[arg(long)]
        sequential: bool,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Solve a single puzzle and show every guess
    Solve {
        /// Starting pattern, e.g. "*a*a"
        pattern: String,

        /// The target word
        target: String,

        /// Show where each letter came from
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the lexicon suggestion and heuristic order for a pattern
    Suggest {
        /// Current pattern
        pattern: String,

        /// Letters already tried, e.g. "e,r,s"
        #[arg(short, long, default_value = "")]
        tried: String,
    },
}

fn init_logger(level: &str) {
    env_logger::Builder::new()
        .filter_level(level.parse().unwrap_or(log::LevelFilter::Info))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level);

    let alphabet = Alphabet::romanian();
    let lexicon = load_or_empty(cli.lexicon.as_deref());

    match cli.command {
        Commands::Batch {
            input,
            output,
            sequential,
            quiet,
        } => {
            let config = BatchConfig {
                parallel: !sequential,
                show_progress: !quiet,
            };
            run_batch_command(
                &cli.strategy,
                cli.wildcard,
                &input,
                &output,
                config,
                &lexicon,
                &alphabet,
            )
        }
        Commands::Solve {
            pattern,
            target,
            verbose,
        } => run_solve_command(
            &cli.strategy,
            cli.wildcard,
            pattern,
            target,
            verbose,
            &lexicon,
            &alphabet,
        ),
        Commands::Suggest { pattern, tried } => {
            let report = suggest_letters(&pattern, &tried, cli.wildcard, &lexicon, &alphabet)
                .context("Invalid pattern")?;
            print_suggestion(&report);
            Ok(())
        }
    }
}

fn run_batch_command(
    strategy_name: &str,
    wildcard: char,
    input: &Path,
    output: &Path,
    config: BatchConfig,
    lexicon: &Lexicon,
    alphabet: &Alphabet,
) -> Result<()> {
    let table = read_puzzles_from_path(input, wildcard)?;

    let strategy = StrategyType::from_name(strategy_name, lexicon, alphabet);
    info!("Using {} strategy", strategy.name());
    let solver = Solver::new(strategy);

    let report = run_batch(&solver, &table.puzzles, &config);
    write_outcomes_to_path(output, &report.outcomes)?;
    info!("Outcomes written to {}", output.display());

    print_batch_statistics(&report.statistics);
    print_rejected_rows(&table.rejected);
    Ok(())
}

fn run_solve_command(
    strategy_name: &str,
    wildcard: char,
    pattern: String,
    target: String,
    verbose: bool,
    lexicon: &Lexicon,
    alphabet: &Alphabet,
) -> Result<()> {
    let solver = Solver::new(StrategyType::from_name(strategy_name, lexicon, alphabet));

    let mut config = SolveConfig::new(pattern, target);
    config.wildcard = wildcard;
    let result = solve_puzzle(&config, &solver).context("Invalid puzzle")?;

    print_solve_result(&result, verbose);
    Ok(())
}
