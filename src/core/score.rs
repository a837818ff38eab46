//! Mastermind feedback scoring
//!
//! A score summarises how a guess relates to a solution:
//! - well-placed: digit matches in value and position
//! - misplaced: digit exists in the solution at another, still unused position
//!
//! Each solution digit is consumed at most once, so repeated digits are counted
//! the way physical Mastermind pegs are.

use super::Code;
use std::fmt;

/// Feedback for a guess against a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    well_placed: u8,
    misplaced: u8,
}

impl Score {
    /// All digits well placed
    pub const PERFECT: Self = Self::new(4, 0);

    /// Create a score from raw counts, returning `None` if they add up to more than 4
    ///
    /// # Examples
    /// ```
    /// use mastermind_puzzle::core::Score;
    ///
    /// assert_eq!(Score::checked(2, 1).map(Score::total), Some(3));
    /// assert!(Score::checked(3, 3).is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn checked(well_placed: u8, misplaced: u8) -> Option<Self> {
        if well_placed as u16 + misplaced as u16 > 4 {
            return None;
        }
        Some(Self {
            well_placed,
            misplaced,
        })
    }

    /// Create a score from counts already known to add up to at most 4
    ///
    /// # Panics
    /// Panics in debug mode if the counts add up to more than 4
    #[inline]
    #[must_use]
    pub(crate) const fn new(well_placed: u8, misplaced: u8) -> Self {
        debug_assert!(well_placed + misplaced <= 4, "Score counts must sum to <= 4");
        Self {
            well_placed,
            misplaced,
        }
    }

    /// Number of well-placed digits
    #[inline]
    #[must_use]
    pub const fn well_placed(self) -> u8 {
        self.well_placed
    }

    /// Number of misplaced digits
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.misplaced
    }

    /// Number of guess digits present in the solution at all
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.well_placed + self.misplaced
    }

    /// Check if the guess is the solution
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.well_placed == 4
    }

    /// Score `guess` against `solution`
    ///
    /// # Examples
    /// ```
    /// use mastermind_puzzle::core::{Code, Score};
    ///
    /// let solution = Code::new("1234").unwrap();
    /// let guess = Code::new("1243").unwrap();
    /// let score = Score::calculate(&solution, &guess);
    ///
    /// assert_eq!(score.well_placed(), 2);
    /// assert_eq!(score.misplaced(), 2);
    /// ```
    #[must_use]
    pub fn calculate(solution: &Code, guess: &Code) -> Self {
        score_digits(solution.digits(), guess.digits())
    }
}

/// Score two digit sequences of equal length
///
/// Unlike [`Score::calculate`] this accepts repeated digits.
///
/// # Algorithm
/// 1. Walk paired positions: count exact matches, collect the remaining
///    solution digits and guess digits
/// 2. For each leftover guess digit, remove its first occurrence from the
///    leftover solution digits and count it as misplaced
///
/// # Panics
/// Panics in debug mode if the sequences differ in length or exceed 4 digits
#[must_use]
pub fn score_digits(solution: &[u8], guess: &[u8]) -> Score {
    debug_assert_eq!(solution.len(), guess.len(), "Sequences must be equal length");
    debug_assert!(solution.len() <= 4, "Sequences must have at most 4 digits");

    let mut well_placed = 0u8;
    let mut solution_pool = Vec::with_capacity(solution.len());
    let mut guess_rest = Vec::with_capacity(guess.len());

    for (&s, &g) in solution.iter().zip(guess) {
        if s == g {
            well_placed += 1;
        } else {
            solution_pool.push(s);
            guess_rest.push(g);
        }
    }

    let mut misplaced = 0u8;
    for g in guess_rest {
        if let Some(pos) = solution_pool.iter().position(|&s| s == g) {
            solution_pool.remove(pos);
            misplaced += 1;
        }
    }

    Score::new(well_placed, misplaced)
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.well_placed, self.misplaced)
    }
}
