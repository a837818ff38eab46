//! Random code sampling
//!
//! Codes are drawn by rejection sampling: a lead digit in 1-9, three digits in
//! 0-9 with replacement, redrawn until all four are distinct.

use super::GenerationError;
use crate::core::{CODE_LENGTH, Code};
use rand::Rng;

/// Draw a random valid code, optionally different from `excluding`
///
/// # Errors
/// Returns `GenerationError::CodeDrawsExhausted` if `max_draws` raw draws all
/// fail (never in practice: roughly half of all raw draws are valid).
///
/// # Examples
/// ```
/// use mastermind_puzzle::core::Code;
/// use mastermind_puzzle::generator::random_code;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let avoid = Code::new("1234").unwrap();
/// let code = random_code(&mut rng, Some(&avoid), 1000).unwrap();
/// assert_ne!(code, avoid);
/// ```
pub fn random_code<R: Rng>(
    rng: &mut R,
    excluding: Option<&Code>,
    max_draws: usize,
) -> Result<Code, GenerationError> {
    for _ in 0..max_draws {
        let mut digits = [0u8; CODE_LENGTH];
        digits[0] = rng.random_range(1..=9);
        for slot in &mut digits[1..] {
            *slot = rng.random_range(0..=9);
        }

        // Repeated digits are rejected here
        let Ok(code) = Code::from_digits(digits) else {
            continue;
        };
        if excluding != Some(&code) {
            return Ok(code);
        }
    }

    Err(GenerationError::CodeDrawsExhausted { draws: max_draws })
}
