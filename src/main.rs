//! Mastermind Puzzle Generator - CLI
//!
//! Generates a 4-digit code with clues that pin it down, and verifies hand-written clue sets.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use mastermind_puzzle::{
    commands::{BatchConfig, GenerateConfig, run_batch, run_generate, score_codes, verify_clues},
    generator::GeneratorConfig,
    output::{print_batch_result, print_puzzle, print_score, print_verify_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind_puzzle",
    about = "Mastermind puzzle generator with brute-force uniqueness verification",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show debug logs (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a puzzle (default)
    Generate {
        /// Number of clues in the puzzle
        #[arg(short, long, default_value_t = GeneratorConfig::DEFAULT_NUM_CLUES)]
        clues: usize,

        /// Seed for reproducible puzzles
        #[arg(short, long)]
        seed: Option<u64>,

        /// Give up after this many puzzle attempts
        #[arg(long, default_value_t = GeneratorConfig::DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,

        /// Print generation statistics after the puzzle
        #[arg(long)]
        stats: bool,
    },

    /// List the codes consistent with a set of clues
    Verify {
        /// Clues as GUESS:WELL:MISPLACED, e.g. 1243:2:2
        #[arg(required = true)]
        clues: Vec<String>,

        /// Maximum number of candidates to list
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Score a guess against a solution
    Score {
        /// The secret code
        solution: String,

        /// The guessed code
        guess: String,
    },

    /// Generate many puzzles in parallel and report statistics
    Batch {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Number of clues per puzzle
        #[arg(short, long, default_value_t = GeneratorConfig::DEFAULT_NUM_CLUES)]
        clues: usize,

        /// Base seed; puzzle i uses seed + i
        #[arg(short, long)]
        seed: Option<u64>,

        /// Give up on a puzzle after this many attempts
        #[arg(long, default_value_t = GeneratorConfig::DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Generate if no command given
    let command = cli.command.unwrap_or(Commands::Generate {
        clues: GeneratorConfig::DEFAULT_NUM_CLUES,
        seed: None,
        max_attempts: GeneratorConfig::DEFAULT_MAX_ATTEMPTS,
        stats: false,
    });

    match command {
        Commands::Generate {
            clues,
            seed,
            max_attempts,
            stats,
        } => run_generate_command(clues, seed, max_attempts, stats),
        Commands::Verify { clues, limit } => run_verify_command(&clues, limit),
        Commands::Score { solution, guess } => run_score_command(&solution, &guess),
        Commands::Batch {
            count,
            clues,
            seed,
            max_attempts,
        } => {
            run_batch_command(count, clues, seed, max_attempts);
            Ok(())
        }
    }
}

fn run_generate_command(
    clues: usize,
    seed: Option<u64>,
    max_attempts: usize,
    stats: bool,
) -> Result<()> {
    let generator = GeneratorConfig::new(clues).with_max_attempts(max_attempts);
    let config = GenerateConfig::new(generator, seed);
    let generated = run_generate(&config).map_err(|e| anyhow::anyhow!(e))?;

    print_puzzle(&generated, stats);
    Ok(())
}

fn run_verify_command(clues: &[String], limit: usize) -> Result<()> {
    let result = verify_clues(clues).map_err(|e| anyhow::anyhow!(e))?;
    print_verify_result(&result, limit);
    Ok(())
}

fn run_score_command(solution: &str, guess: &str) -> Result<()> {
    let clue = score_codes(solution, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score(&clue);
    Ok(())
}

fn run_batch_command(count: usize, clues: usize, seed: Option<u64>, max_attempts: usize) {
    println!("Generating {count} puzzles with {clues} clues each...");

    let config = BatchConfig {
        count,
        generator: GeneratorConfig::new(clues).with_max_attempts(max_attempts),
        seed,
        show_progress: true,
    };
    let result = run_batch(&config);
    print_batch_result(&result);
}
