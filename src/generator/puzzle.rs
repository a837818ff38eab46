//! Puzzle generation loop
//!
//! Each attempt walks the same states:
//! 1. Draw a solution
//! 2. Draw a clue set for it
//! 3. Verify the clue set against the whole code space
//! 4. Accept if the solution is the only candidate, otherwise discard everything and retry
//!
//! Attempts are bounded by `GeneratorConfig::max_attempts`.

use super::{GenerationError, GeneratorConfig, generate_puzzle_clues, random_code};
use crate::core::{Clue, Code};
use crate::solver::candidate_solutions;
use log::{debug, info, warn};
use rand::Rng;

/// A secret code with clues that identify it uniquely
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    solution: Code,
    clues: Vec<Clue>,
}

impl Puzzle {
    /// The secret code
    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Code {
        &self.solution
    }

    /// Clues in generation order
    #[inline]
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Re-run the verifier and check that the solution is the only candidate
    #[must_use]
    pub fn is_unique(&self) -> bool {
        candidate_solutions(&self.clues) == [self.solution]
    }
}

/// Counters collected while generating one puzzle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Attempts made, including the accepted one
    pub attempts: usize,
    /// Attempts whose clue set hit the draw cap before filling up
    pub underfilled: usize,
    /// Attempts left with several candidates
    pub ambiguous: usize,
    /// Attempts left with no candidate at all
    pub unsolvable: usize,
    /// Attempts whose only candidate was not the drawn solution
    pub mismatched: usize,
    /// Attempts abandoned because code sampling hit its draw cap
    pub draws_exhausted: usize,
}

impl GenerationStats {
    /// Number of discarded attempts
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.underfilled + self.ambiguous + self.unsolvable + self.mismatched + self.draws_exhausted
    }
}

/// An accepted puzzle together with how it was found
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    pub puzzle: Puzzle,
    pub stats: GenerationStats,
}

/// How a single attempt ended
enum AttemptOutcome {
    Accepted(Puzzle),
    UnderFilled { collected: usize },
    NotUnique { candidates: usize },
    WrongSolution { found: Code, expected: Code },
    DrawsExhausted(GenerationError),
}

/// Generate a uniquely solvable puzzle
///
/// # Errors
/// - `GenerationError::InvalidConfig` if no clues are requested
/// - `GenerationError::AttemptsExhausted` if `config.max_attempts` attempts all fail
///
/// # Examples
/// ```
/// use mastermind_puzzle::generator::{GeneratorConfig, generate_puzzle};
/// use mastermind_puzzle::solver::candidate_solutions;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let generated = generate_puzzle(&mut rng, &GeneratorConfig::default()).unwrap();
/// let puzzle = generated.puzzle;
///
/// assert_eq!(candidate_solutions(puzzle.clues()), vec![*puzzle.solution()]);
/// ```
pub fn generate_puzzle<R: Rng>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<GeneratedPuzzle, GenerationError> {
    if config.num_clues == 0 {
        return Err(GenerationError::InvalidConfig(
            "at least one clue is required".to_string(),
        ));
    }

    let mut stats = GenerationStats::default();

    while stats.attempts < config.max_attempts {
        stats.attempts += 1;

        match attempt(rng, config) {
            AttemptOutcome::Accepted(puzzle) => {
                info!(
                    "Accepted puzzle {} after {} attempt(s)",
                    puzzle.solution, stats.attempts
                );
                return Ok(GeneratedPuzzle { puzzle, stats });
            }
            AttemptOutcome::UnderFilled { collected } => {
                debug!(
                    "Attempt {}: only {collected}/{} clues collected",
                    stats.attempts, config.num_clues
                );
                stats.underfilled += 1;
            }
            AttemptOutcome::NotUnique { candidates: 0 } => {
                debug!("Attempt {}: no candidate left", stats.attempts);
                stats.unsolvable += 1;
            }
            AttemptOutcome::NotUnique { candidates } => {
                debug!("Attempt {}: {candidates} candidates left", stats.attempts);
                stats.ambiguous += 1;
            }
            AttemptOutcome::WrongSolution { found, expected } => {
                warn!(
                    "Attempt {}: sole candidate {found} differs from solution {expected}",
                    stats.attempts
                );
                stats.mismatched += 1;
            }
            AttemptOutcome::DrawsExhausted(e) => {
                debug!("Attempt {}: {e}", stats.attempts);
                stats.draws_exhausted += 1;
            }
        }
    }

    Err(GenerationError::AttemptsExhausted {
        attempts: stats.attempts,
    })
}

fn attempt<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> AttemptOutcome {
    let drawn = random_code(rng, None, config.max_code_draws).and_then(|solution| {
        generate_puzzle_clues(rng, &solution, config).map(|clues| (solution, clues))
    });
    let (solution, clues) = match drawn {
        Ok(drawn) => drawn,
        Err(e) => return AttemptOutcome::DrawsExhausted(e),
    };

    if clues.len() < config.num_clues {
        return AttemptOutcome::UnderFilled {
            collected: clues.len(),
        };
    }

    let candidates = candidate_solutions(&clues);
    match candidates.as_slice() {
        [only] if *only == solution => AttemptOutcome::Accepted(Puzzle { solution, clues }),
        [only] => AttemptOutcome::WrongSolution {
            found: *only,
            expected: solution,
        },
        _ => AttemptOutcome::NotUnique {
            candidates: candidates.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::is_balanced;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_puzzle_is_unique() {
        let mut rng = StdRng::seed_from_u64(7);
        let generated = generate_puzzle(&mut rng, &GeneratorConfig::default()).unwrap();
        let puzzle = &generated.puzzle;

        assert_eq!(puzzle.clues().len(), 6);
        assert!(puzzle.is_unique());
        assert_eq!(
            candidate_solutions(puzzle.clues()),
            vec![*puzzle.solution()]
        );
    }

    #[test]
    fn sole_candidate_is_always_the_solution() {
        // Scoring is consistent, so the drawn solution always survives its own clues
        let mut rng = StdRng::seed_from_u64(123);
        let config = GeneratorConfig::default();

        for _ in 0..10 {
            let generated = generate_puzzle(&mut rng, &config).unwrap();
            assert_eq!(generated.stats.mismatched, 0);
            assert_eq!(generated.stats.unsolvable, 0);
            assert!(generated.puzzle.is_unique());
        }
    }

    #[test]
    fn generated_clues_are_balanced() {
        let mut rng = StdRng::seed_from_u64(99);
        let generated = generate_puzzle(&mut rng, &GeneratorConfig::new(5)).unwrap();

        for clue in generated.puzzle.clues() {
            assert!(is_balanced(clue.score()));
            assert!(clue.admits(generated.puzzle.solution()));
        }
    }

    #[test]
    fn stats_account_for_every_attempt() {
        let mut rng = StdRng::seed_from_u64(5);
        let generated = generate_puzzle(&mut rng, &GeneratorConfig::default()).unwrap();
        let stats = generated.stats;

        assert!(stats.attempts >= 1);
        assert_eq!(stats.rejected() + 1, stats.attempts);
    }

    #[test]
    fn same_seed_same_puzzle() {
        let config = GeneratorConfig::default();
        let a = generate_puzzle(&mut StdRng::seed_from_u64(31), &config).unwrap();
        let b = generate_puzzle(&mut StdRng::seed_from_u64(31), &config).unwrap();
        assert_eq!(a.puzzle, b.puzzle);
    }

    #[test]
    fn zero_attempts_exhausts_immediately() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = GeneratorConfig::default().with_max_attempts(0);
        assert_eq!(
            generate_puzzle(&mut rng, &config).unwrap_err(),
            GenerationError::AttemptsExhausted { attempts: 0 }
        );
    }

    #[test]
    fn too_few_clues_exhausts_attempts() {
        // A single balanced clue never narrows 4536 codes down to one
        let mut rng = StdRng::seed_from_u64(0);
        let config = GeneratorConfig::new(1).with_max_attempts(20);
        assert_eq!(
            generate_puzzle(&mut rng, &config).unwrap_err(),
            GenerationError::AttemptsExhausted { attempts: 20 }
        );
    }

    #[test]
    fn failed_code_sampling_is_retried_per_attempt() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = GeneratorConfig {
            max_code_draws: 0,
            ..GeneratorConfig::default().with_max_attempts(3)
        };
        assert_eq!(
            generate_puzzle(&mut rng, &config).unwrap_err(),
            GenerationError::AttemptsExhausted { attempts: 3 }
        );
    }

    #[test]
    fn zero_clues_is_invalid() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_puzzle(&mut rng, &GeneratorConfig::new(0)),
            Err(GenerationError::InvalidConfig(_))
        ));
    }
}
