//! Puzzle verification
//!
//! Brute-force search over the whole code space.

mod verifier;

pub use verifier::{CODE_SPACE_SIZE, all_codes, candidate_solutions, count_candidates, unique_solution};
