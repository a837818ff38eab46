//! Brute-force clue verifier
//!
//! Enumerates the whole code space and keeps the codes consistent with every clue.

use crate::core::{Clue, Code};

/// Size of the code space: 9 × 9 × 8 × 7
pub const CODE_SPACE_SIZE: usize = 4536;

/// Enumerate every valid code in lexicographic order
///
/// # Examples
/// ```
/// use mastermind_puzzle::solver::{CODE_SPACE_SIZE, all_codes};
///
/// let codes = all_codes();
/// assert_eq!(codes.len(), CODE_SPACE_SIZE);
/// assert_eq!(codes[0].to_string(), "1023");
/// assert_eq!(codes[codes.len() - 1].to_string(), "9876");
/// ```
#[must_use]
pub fn all_codes() -> Vec<Code> {
    let mut codes = Vec::with_capacity(CODE_SPACE_SIZE);

    for a in 1..=9u8 {
        for b in (0..=9u8).filter(|&b| b != a) {
            for c in (0..=9u8).filter(|&c| c != a && c != b) {
                for d in (0..=9u8).filter(|&d| d != a && d != b && d != c) {
                    // Distinct digits with a non-zero lead are always valid
                    if let Ok(code) = Code::from_digits([a, b, c, d]) {
                        codes.push(code);
                    }
                }
            }
        }
    }

    codes
}

/// Filter the code space to those codes consistent with all clues
///
/// Returns candidates in lexicographic order. With no clues every code is a candidate.
#[must_use]
pub fn candidate_solutions(clues: &[Clue]) -> Vec<Code> {
    all_codes()
        .into_iter()
        .filter(|candidate| clues.iter().all(|clue| clue.admits(candidate)))
        .collect()
}

/// Count how many codes remain consistent with the clues
#[must_use]
pub fn count_candidates(clues: &[Clue]) -> usize {
    candidate_solutions(clues).len()
}

/// Return the single code consistent with the clues, if there is exactly one
#[must_use]
pub fn unique_solution(clues: &[Clue]) -> Option<Code> {
    match candidate_solutions(clues).as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}
