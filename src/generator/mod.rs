//! Puzzle generation
//!
//! Random code sampling, clue set construction and the bounded retry loop that
//! ties them to the verifier.

mod clues;
mod config;
mod error;
mod puzzle;
mod random;

pub use clues::{generate_puzzle_clues, is_balanced};
pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use puzzle::{GeneratedPuzzle, GenerationStats, Puzzle, generate_puzzle};
pub use random::random_code;
