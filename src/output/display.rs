//! Display functions for command results

use super::formatters::{create_progress_bar, letter_list, spaced_pattern};
use crate::commands::{BatchStatistics, SolveResult, SuggestionReport};
use crate::solver::Source;
use crate::table::RejectedRow;
use colored::Colorize;

/// Print the guess trace of a single puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let outcome = &result.outcome;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  (target {})",
        spaced_pattern(&result.initial).bright_yellow().bold(),
        result.target.text().to_uppercase()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in outcome.steps.iter().enumerate() {
        let mark = if step.is_hit() {
            format!("{:>4}", format!("+{}", step.revealed)).green()
        } else {
            "miss".red()
        };
        println!(
            "Guess {:2}: {}  {}  {}",
            i + 1,
            step.letter.to_string().bold(),
            mark,
            spaced_pattern(&step.pattern_after)
        );

        if verbose {
            match step.source {
                Source::Lexicon { candidates } => {
                    println!("           lexicon, {candidates} candidates");
                }
                Source::Heuristic => println!("           heuristic order"),
            }
        }
    }

    println!();
    if outcome.is_solved() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", outcome.guess_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Stalled after {} guesses at {}",
                outcome.guess_count(),
                outcome.final_pattern
            )
            .red()
            .bold()
        );
    }
}

/// Print what each selection stage proposes for a game state
pub fn print_suggestion(report: &SuggestionReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SUGGESTION:".bright_cyan().bold(),
        spaced_pattern(&report.pattern).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Tried:       {}", letter_list(&report.tried, " "));
    println!(
        "   Hints:       near vowel: {}, near consonant: {}, repeated letter: {}",
        report.traits.wildcard_near_vowel,
        report.traits.wildcard_near_consonant,
        report.traits.repeated_letter
    );

    println!("\n📚 {}", "Lexicon".bright_cyan().bold());
    println!("   Candidates:  {}", report.candidates.len());
    for word in report.candidates.iter().take(10) {
        println!("     {word}");
    }
    if report.candidates.len() > 10 {
        println!("     … and {} more", report.candidates.len() - 10);
    }
    match report.lexicon {
        Some(suggestion) => println!(
            "   Suggestion:  {}",
            suggestion.letter.to_string().bright_green().bold()
        ),
        None => println!("   Suggestion:  {}", "none".bright_black()),
    }

    println!("\n🧭 {}", "Heuristic order".bright_cyan().bold());
    println!("   {}", letter_list(&report.ranking, " "));
}

/// Print the run summary of a batch
pub fn print_batch_statistics(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total games:         {}", stats.total_games);
    println!(
        "  Solved (OK):         {}",
        stats.solved.to_string().green()
    );
    if stats.failed > 0 {
        println!("  Unsolved (FAIL):     {}", stats.failed.to_string().red());
    } else {
        println!("  Unsolved (FAIL):     {}", stats.failed);
    }
    println!("  Total guesses:       {}", stats.total_guesses);
    println!(
        "  Average guesses:     {}",
        format!("{:.2}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    if let Some((id, guesses)) = &stats.hardest {
        println!("  Hardest game:        {} ({guesses} guesses)", id.yellow());
    }
    println!(
        "  Time taken:          {:.2}s",
        stats.duration.as_secs_f64()
    );

    if stats.guess_distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (guesses, &count) in &stats.guess_distribution {
        let pct = count as f64 / stats.total_games as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses:3}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the rows that were skipped, on stderr
pub fn print_rejected_rows(rejected: &[RejectedRow]) {
    if rejected.is_empty() {
        return;
    }

    eprintln!("\n{}", "Some rows were skipped or invalid:".yellow().bold());
    for rejected_row in rejected {
        eprintln!(" - row {}: {}", rejected_row.row, rejected_row.error);
    }
}
