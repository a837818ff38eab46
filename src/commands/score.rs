//! Scoring command
//!
//! Scores one guess against one solution.

use crate::core::{Clue, Code};

/// Score `guess` against `solution`, both given as text
///
/// # Errors
///
/// Returns an error if either code is invalid.
pub fn score_codes(solution: &str, guess: &str) -> Result<Clue, String> {
    let solution = Code::new(solution).map_err(|e| format!("Invalid solution: {e}"))?;
    let guess = Code::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(Clue::scored(&solution, guess))
}
