//! Batch generation - measures how hard the generator works
//!
//! Generates many independent puzzles in parallel and aggregates attempt statistics.

use super::generate::make_rng;
use crate::core::Score;
use crate::generator::{GeneratedPuzzle, GenerationError, GeneratorConfig, generate_puzzle};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Attempt counts at or above this share one histogram bucket
pub const ATTEMPT_BUCKET_CAP: usize = 10;

/// Configuration for a batch run
pub struct BatchConfig {
    pub count: usize,
    pub generator: GeneratorConfig,
    /// Puzzle `i` is seeded with `seed + i` when set
    pub seed: Option<u64>,
    pub show_progress: bool,
}

/// Result of a batch run
#[derive(Debug)]
pub struct BatchResult {
    pub total_puzzles: usize,
    pub generated: usize,
    pub failed: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub underfilled: usize,
    pub ambiguous: usize,
    /// Accepted puzzles per attempt count, capped at `ATTEMPT_BUCKET_CAP`
    pub attempt_distribution: FxHashMap<usize, usize>,
    /// Clue feedback frequencies across accepted puzzles
    pub feedback_distribution: FxHashMap<Score, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `config.count` puzzles in parallel
pub fn run_batch(config: &BatchConfig) -> BatchResult {
    let pb = if config.show_progress {
        ProgressBar::new(config.count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let results: Vec<Result<GeneratedPuzzle, GenerationError>> = (0..config.count)
        .into_par_iter()
        .map(|i| {
            let mut rng = make_rng(config.seed.map(|s| s.wrapping_add(i as u64)));
            let result = generate_puzzle(&mut rng, &config.generator);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, start.elapsed())
}

fn summarize(results: &[Result<GeneratedPuzzle, GenerationError>], duration: Duration) -> BatchResult {
    let mut attempt_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut feedback_distribution: FxHashMap<Score, usize> = FxHashMap::default();
    let mut total_attempts = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;
    let mut underfilled = 0;
    let mut ambiguous = 0;
    let mut generated = 0;

    for result in results {
        let generated_puzzle = match result {
            Ok(p) => p,
            Err(e) => {
                warn!("Batch puzzle failed: {e}");
                continue;
            }
        };

        let stats = generated_puzzle.stats;
        generated += 1;
        total_attempts += stats.attempts;
        min_attempts = min_attempts.min(stats.attempts);
        max_attempts = max_attempts.max(stats.attempts);
        underfilled += stats.underfilled;
        ambiguous += stats.ambiguous;
        *attempt_distribution
            .entry(stats.attempts.min(ATTEMPT_BUCKET_CAP))
            .or_insert(0) += 1;

        for clue in generated_puzzle.puzzle.clues() {
            *feedback_distribution.entry(clue.score()).or_insert(0) += 1;
        }
    }

    let total_puzzles = results.len();
    let average_attempts = if generated > 0 {
        total_attempts as f64 / generated as f64
    } else {
        0.0
    };
    let puzzles_per_second = if duration.as_secs_f64() > 0.0 {
        generated as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    BatchResult {
        total_puzzles,
        generated,
        failed: total_puzzles - generated,
        total_attempts,
        average_attempts,
        min_attempts: if generated > 0 { min_attempts } else { 0 },
        max_attempts,
        underfilled,
        ambiguous,
        attempt_distribution,
        feedback_distribution,
        duration,
        puzzles_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::is_balanced;

    fn batch(count: usize, generator: GeneratorConfig) -> BatchResult {
        run_batch(&BatchConfig {
            count,
            generator,
            seed: Some(10),
            show_progress: false,
        })
    }

    #[test]
    fn batch_runs() {
        let result = batch(8, GeneratorConfig::default());

        assert_eq!(result.total_puzzles, 8);
        assert_eq!(result.generated, 8);
        assert_eq!(result.failed, 0);
        assert!(result.min_attempts >= 1);
        assert!(result.max_attempts >= result.min_attempts);
        assert!(result.average_attempts >= 1.0);
    }

    #[test]
    fn batch_distributions_sum_correctly() {
        let result = batch(6, GeneratorConfig::default());

        let attempts_sum: usize = result.attempt_distribution.values().sum();
        assert_eq!(attempts_sum, result.generated);

        let feedback_sum: usize = result.feedback_distribution.values().sum();
        assert_eq!(feedback_sum, result.generated * 6);
        assert!(result.feedback_distribution.keys().all(|&s| is_balanced(s)));
    }

    #[test]
    fn batch_rejections_match_attempts() {
        let result = batch(5, GeneratorConfig::default());
        assert_eq!(
            result.underfilled + result.ambiguous + result.generated,
            result.total_attempts
        );
    }

    #[test]
    fn batch_counts_failures() {
        // One clue can never be unique
        let result = batch(3, GeneratorConfig::new(1).with_max_attempts(2));

        assert_eq!(result.generated, 0);
        assert_eq!(result.failed, 3);
        assert_eq!(result.min_attempts, 0);
        assert!(result.attempt_distribution.is_empty());
    }

    #[test]
    fn batch_empty() {
        let result = batch(0, GeneratorConfig::default());
        assert_eq!(result.total_puzzles, 0);
        assert_eq!(result.generated, 0);
        assert!(result.average_attempts.abs() < f64::EPSILON);
    }
}
