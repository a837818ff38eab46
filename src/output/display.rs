//! Display functions for command results

use super::formatters::{create_progress_bar, render_puzzle};
use crate::commands::batch::ATTEMPT_BUCKET_CAP;
use crate::commands::{BatchResult, VerifyResult};
use crate::core::{Clue, Score};
use crate::generator::{GeneratedPuzzle, GenerationStats};
use colored::Colorize;

/// Print an accepted puzzle, optionally followed by generation statistics
pub fn print_puzzle(generated: &GeneratedPuzzle, show_stats: bool) {
    print!("{}", render_puzzle(&generated.puzzle));

    if show_stats {
        print_generation_stats(&generated.stats);
    }
}

fn print_generation_stats(stats: &GenerationStats) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("📊 {}", "Generation:".bright_cyan().bold());
    println!(
        "   Attempts:         {}",
        stats.attempts.to_string().bright_yellow().bold()
    );
    println!("   Under-filled:     {}", stats.underfilled);
    println!("   Ambiguous:        {}", stats.ambiguous);
    if stats.draws_exhausted > 0 {
        println!("   Draw cap hit:     {}", stats.draws_exhausted);
    }
    if stats.unsolvable + stats.mismatched > 0 {
        println!(
            "   Inconsistent:     {}",
            (stats.unsolvable + stats.mismatched).to_string().red()
        );
    }
}

/// Print the outcome of verifying a clue set
pub fn print_verify_result(result: &VerifyResult, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    for clue in &result.clues {
        println!("  • {}", clue.phrase());
    }
    println!("{}", "─".repeat(60).cyan());

    let count = result.candidates.len();
    println!("\nCandidates: {}", count.to_string().bright_yellow().bold());
    for code in result.candidates.iter().take(limit) {
        println!("  • {code}");
    }
    if count > limit {
        println!("  ...and {} more", count - limit);
    }

    println!();
    match result.unique_solution() {
        Some(code) => println!(
            "{}",
            format!("✅ Unique solution: {code}").green().bold()
        ),
        None if count == 0 => println!("{}", "❌ No code satisfies these clues".red().bold()),
        None => println!(
            "{}",
            format!("❌ Not unique: {count} codes remain").red().bold()
        ),
    }
}

/// Print a single scored guess
pub fn print_score(clue: &Clue) {
    let score = clue.score();
    println!(
        "Well placed: {}  Misplaced: {}",
        score.well_placed().to_string().green().bold(),
        score.misplaced().to_string().yellow().bold()
    );
    println!("{}", clue.phrase());
}

/// Print the result of a batch run
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles requested: {}", result.total_puzzles);
    println!(
        "   Generated:         {}",
        result.generated.to_string().green()
    );
    if result.failed > 0 {
        println!("   Failed:            {}", result.failed.to_string().red());
    }
    println!(
        "   Average attempts:  {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:         {}",
        result.min_attempts.to_string().green()
    );
    println!(
        "   Worst case:        {}",
        result.max_attempts.to_string().yellow()
    );
    println!("   Under-filled:      {}", result.underfilled);
    println!("   Ambiguous:         {}", result.ambiguous);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:    {:.1}", result.puzzles_per_second);

    if result.generated == 0 {
        return;
    }

    println!("\n📈 {}", "Attempts:".bright_cyan().bold());
    for attempts in 1..=ATTEMPT_BUCKET_CAP {
        if let Some(&count) = result.attempt_distribution.get(&attempts) {
            let label = if attempts == ATTEMPT_BUCKET_CAP {
                format!("{attempts}+")
            } else {
                attempts.to_string()
            };
            print_histogram_row(&label, count, result.generated);
        }
    }

    println!("\n🧩 {}", "Clue feedback:".bright_cyan().bold());
    let mut feedback: Vec<(Score, usize)> = result
        .feedback_distribution
        .iter()
        .map(|(&score, &count)| (score, count))
        .collect();
    feedback.sort_unstable();
    let total_clues: usize = feedback.iter().map(|(_, count)| count).sum();
    for (score, count) in feedback {
        print_histogram_row(&score.to_string(), count, total_clues);
    }
}

fn print_histogram_row(label: &str, count: usize, total: usize) {
    let pct = count as f64 / total as f64 * 100.0;
    let bar = create_progress_bar(pct, 100.0, 40);
    let filled = bar.chars().filter(|&c| c == '█').count();
    let (done, rest) = bar.split_at(filled * '█'.len_utf8());
    println!(
        "   {label:>3}: {}{} {count:5} ({pct:5.1}%)",
        done.green(),
        rest.bright_black()
    );
}
