//! Core domain types for Mastermind puzzles
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod clue;
mod code;
mod phrase;
mod score;

pub use clue::{Clue, ClueError};
pub use code::{CODE_LENGTH, Code, CodeError};
pub use phrase::phrase_for;
pub use score::{Score, score_digits};
