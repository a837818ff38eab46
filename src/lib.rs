//! Mastermind Puzzle Generator
//!
//! Generates 4-digit Mastermind puzzles whose clues identify the secret code uniquely,
//! verified by brute force over all 4536 valid codes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_puzzle::core::{Code, Score};
//! use mastermind_puzzle::generator::{GeneratorConfig, generate_puzzle};
//!
//! // Score a guess
//! let solution = Code::new("1234").unwrap();
//! let guess = Code::new("1243").unwrap();
//! println!("Score: {}", Score::calculate(&solution, &guess));
//!
//! // Generate a puzzle
//! let generated = generate_puzzle(&mut rand::rng(), &GeneratorConfig::default()).unwrap();
//! for clue in generated.puzzle.clues() {
//!     println!("{clue}");
//! }
//! ```

// Core domain types
pub mod core;

// Brute-force verification
pub mod solver;

// Random puzzle generation
pub mod generator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
