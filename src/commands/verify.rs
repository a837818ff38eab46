//! Clue verification command
//!
//! Checks a hand-written clue set against the whole code space.

use crate::core::{Clue, Code};
use crate::solver::candidate_solutions;

/// Result of verifying a clue set
#[derive(Debug)]
pub struct VerifyResult {
    pub clues: Vec<Clue>,
    pub candidates: Vec<Code>,
}

impl VerifyResult {
    /// The solution, if the clues pin down exactly one code
    #[must_use]
    pub fn unique_solution(&self) -> Option<&Code> {
        match self.candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

/// Parse clues written as `GUESS:WELL:MISPLACED` and list the matching codes
///
/// # Errors
///
/// Returns an error naming the first clue that fails to parse.
pub fn verify_clues<S: AsRef<str>>(specs: &[S]) -> Result<VerifyResult, String> {
    let clues = specs
        .iter()
        .map(|spec| Clue::parse(spec.as_ref()).map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    let candidates = candidate_solutions(&clues);

    Ok(VerifyResult { clues, candidates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GeneratorConfig, generate_puzzle};
    use crate::solver::CODE_SPACE_SIZE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn verify_no_clues() {
        let result = verify_clues::<&str>(&[]).unwrap();
        assert_eq!(result.candidates.len(), CODE_SPACE_SIZE);
        assert!(result.unique_solution().is_none());
    }

    #[test]
    fn verify_perfect_clue() {
        let result = verify_clues(&["4721:4:0"]).unwrap();
        assert_eq!(result.unique_solution(), Some(&Code::new("4721").unwrap()));
    }

    #[test]
    fn verify_generated_puzzle_round_trip() {
        let mut rng = StdRng::seed_from_u64(17);
        let puzzle = generate_puzzle(&mut rng, &GeneratorConfig::default())
            .unwrap()
            .puzzle;

        let specs: Vec<String> = puzzle
            .clues()
            .iter()
            .map(|c| format!("{}:{}", c.guess(), c.score()))
            .collect();

        let result = verify_clues(specs.as_slice()).unwrap();
        assert_eq!(result.unique_solution(), Some(puzzle.solution()));
    }

    #[test]
    fn verify_result_debug_lists_candidates() {
        let result = verify_clues(&["4721:4:0"]).unwrap();
        let debug = format!("{result:?}");
        assert!(debug.contains("candidates"), "unexpected debug output: {debug}");
    }

    #[test]
    fn verify_reports_bad_clue() {
        let err = verify_clues(&["1234:1:1", "12:0:0"]).unwrap_err();
        assert!(err.contains("Invalid guess"), "unexpected error: {err}");
    }
}
