//! Puzzle generation command
//!
//! Builds the RNG from an optional seed and runs the generator.

use crate::generator::{GeneratedPuzzle, GenerationError, GeneratorConfig, generate_puzzle};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for generating a single puzzle
pub struct GenerateConfig {
    pub generator: GeneratorConfig,
    pub seed: Option<u64>,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(generator: GeneratorConfig, seed: Option<u64>) -> Self {
        Self { generator, seed }
    }
}

/// Build an RNG, seeded for reproducibility when a seed is given
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

/// Generate one puzzle
///
/// # Errors
///
/// Returns `GenerationError` if no uniquely solvable puzzle is found within
/// the configured attempt budget.
pub fn run_generate(config: &GenerateConfig) -> Result<GeneratedPuzzle, GenerationError> {
    let mut rng = make_rng(config.seed);
    generate_puzzle(&mut rng, &config.generator)
}
