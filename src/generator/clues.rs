//! Clue set generation
//!
//! Draws random guesses against a solution and keeps the ones whose feedback is
//! neither empty-handed nor close to giving the answer away.

use super::{GenerationError, GeneratorConfig, random_code};
use crate::core::{Clue, Code, Score};
use log::trace;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Check whether a score is acceptable as a puzzle clue
///
/// Rejects:
/// - four digits found (well-placed + misplaced = 4)
/// - three or more misplaced with nothing well placed
/// - three or more well placed with nothing misplaced
///
/// # Examples
/// ```
/// use mastermind_puzzle::core::Score;
/// use mastermind_puzzle::generator::is_balanced;
///
/// assert!(is_balanced(Score::checked(1, 1).unwrap()));
/// assert!(!is_balanced(Score::checked(2, 2).unwrap()));
/// assert!(!is_balanced(Score::checked(3, 0).unwrap()));
/// ```
#[must_use]
pub const fn is_balanced(score: Score) -> bool {
    let well = score.well_placed();
    let mis = score.misplaced();

    well + mis <= 3 && !(well == 0 && mis > 2) && !(mis == 0 && well > 2)
}

/// Generate up to `config.num_clues` distinct, balanced clues for `solution`
///
/// Stops after `config.clue_attempts` guess draws even if the set is not full;
/// the caller must check the length of the result.
///
/// # Errors
/// Returns `GenerationError::CodeDrawsExhausted` if a guess cannot be sampled
pub fn generate_puzzle_clues<R: Rng>(
    rng: &mut R,
    solution: &Code,
    config: &GeneratorConfig,
) -> Result<Vec<Clue>, GenerationError> {
    let mut clues = Vec::with_capacity(config.num_clues);
    let mut used: FxHashSet<Code> = FxHashSet::default();

    for _ in 0..config.clue_attempts {
        if clues.len() >= config.num_clues {
            break;
        }

        let guess = random_code(rng, Some(solution), config.max_code_draws)?;
        if !used.insert(guess) {
            continue;
        }

        let score = Score::calculate(solution, &guess);
        if is_balanced(score) {
            clues.push(Clue::new(guess, score));
        } else {
            trace!("Rejected guess {guess} ({score}) for {solution}");
        }
    }

    Ok(clues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn balanced_scores() {
        let accepted = [(0, 0), (1, 0), (0, 1), (1, 1), (2, 0), (0, 2), (2, 1), (1, 2)];
        let rejected = [(0, 3), (0, 4), (3, 0), (4, 0), (2, 2), (3, 1), (1, 3)];

        for (w, m) in accepted {
            assert!(is_balanced(Score::new(w, m)), "{w}:{m} should be accepted");
        }
        for (w, m) in rejected {
            assert!(!is_balanced(Score::new(w, m)), "{w}:{m} should be rejected");
        }
    }

    #[test]
    fn generated_clues_obey_constraints() {
        let mut rng = StdRng::seed_from_u64(2024);
        let config = GeneratorConfig::default();

        for _ in 0..50 {
            let solution = random_code(&mut rng, None, 1000).unwrap();
            let clues = generate_puzzle_clues(&mut rng, &solution, &config).unwrap();

            for clue in &clues {
                let (w, m) = (clue.well_placed(), clue.misplaced());
                assert!(w + m <= 3);
                assert!(!(w == 0 && m > 2));
                assert!(!(m == 0 && w > 2));
                assert_ne!(clue.guess(), &solution);
                assert_eq!(clue.score(), Score::calculate(&solution, clue.guess()));
            }
        }
    }

    #[test]
    fn generated_clues_are_distinct_and_full() {
        let mut rng = StdRng::seed_from_u64(11);
        let solution = Code::new("5290").unwrap();
        let config = GeneratorConfig::new(8);

        let clues = generate_puzzle_clues(&mut rng, &solution, &config).unwrap();
        assert_eq!(clues.len(), 8);

        let guesses: FxHashSet<&Code> = clues.iter().map(Clue::guess).collect();
        assert_eq!(guesses.len(), clues.len());
    }

    #[test]
    fn attempt_cap_fails_open() {
        let mut rng = StdRng::seed_from_u64(3);
        let solution = Code::new("1234").unwrap();
        let config = GeneratorConfig {
            clue_attempts: 2,
            ..GeneratorConfig::new(6)
        };

        let clues = generate_puzzle_clues(&mut rng, &solution, &config).unwrap();
        assert!(clues.len() <= 2);
    }

    #[test]
    fn zero_clues_requested() {
        let mut rng = StdRng::seed_from_u64(3);
        let solution = Code::new("1234").unwrap();
        let clues = generate_puzzle_clues(&mut rng, &solution, &GeneratorConfig::new(0)).unwrap();
        assert!(clues.is_empty());
    }
}
