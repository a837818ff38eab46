//! Puzzle clues
//!
//! A clue pairs a guess with its feedback and the phrase shown to the player.

use super::{Code, CodeError, Score, phrase_for};
use std::fmt;

/// A guess with its recorded feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    guess: Code,
    score: Score,
    phrase: String,
}

/// Error type for clues that cannot be built or parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueError {
    InvalidCode(CodeError),
    InvalidCount(String),
    TooManyPegs { well_placed: u8, misplaced: u8 },
    MalformedSpec(String),
}

impl fmt::Display for ClueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode(e) => write!(f, "Invalid guess: {e}"),
            Self::InvalidCount(raw) => write!(f, "Invalid count '{raw}', expected 0-4"),
            Self::TooManyPegs {
                well_placed,
                misplaced,
            } => write!(
                f,
                "Well-placed ({well_placed}) plus misplaced ({misplaced}) exceeds 4"
            ),
            Self::MalformedSpec(raw) => {
                write!(f, "Malformed clue '{raw}', expected GUESS:WELL:MISPLACED")
            }
        }
    }
}

impl std::error::Error for ClueError {}

impl From<CodeError> for ClueError {
    fn from(e: CodeError) -> Self {
        Self::InvalidCode(e)
    }
}

impl Clue {
    /// Create a clue from a guess and its score, phrasing it
    #[must_use]
    pub fn new(guess: Code, score: Score) -> Self {
        let phrase = phrase_for(&guess, score);
        Self {
            guess,
            score,
            phrase,
        }
    }

    /// Score `guess` against `solution` and wrap it as a clue
    #[must_use]
    pub fn scored(solution: &Code, guess: Code) -> Self {
        Self::new(guess, Score::calculate(solution, &guess))
    }

    /// Create a clue from raw counts
    ///
    /// # Errors
    /// Returns `ClueError::TooManyPegs` if the counts add up to more than 4
    pub fn from_counts(guess: Code, well_placed: u8, misplaced: u8) -> Result<Self, ClueError> {
        let score = Score::checked(well_placed, misplaced).ok_or(ClueError::TooManyPegs {
            well_placed,
            misplaced,
        })?;
        Ok(Self::new(guess, score))
    }

    /// Parse a clue written as `GUESS:WELL:MISPLACED`, e.g. `1243:2:2`
    ///
    /// # Errors
    /// Returns `ClueError` if the format, the guess, or a count is invalid
    ///
    /// # Examples
    /// ```
    /// use mastermind_puzzle::core::Clue;
    ///
    /// let clue = Clue::parse("1243:2:2").unwrap();
    /// assert_eq!(clue.well_placed(), 2);
    /// assert_eq!(clue.misplaced(), 2);
    ///
    /// assert!(Clue::parse("1243:3:2").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self, ClueError> {
        let parts: Vec<&str> = spec.trim().split(':').collect();
        let [guess, well, mis] = parts.as_slice() else {
            return Err(ClueError::MalformedSpec(spec.to_string()));
        };

        let guess = Code::new(guess)?;
        Self::from_counts(guess, parse_count(well)?, parse_count(mis)?)
    }

    /// The guessed code
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    /// The recorded feedback
    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn well_placed(&self) -> u8 {
        self.score.well_placed()
    }

    #[inline]
    #[must_use]
    pub const fn misplaced(&self) -> u8 {
        self.score.misplaced()
    }

    /// The phrase shown to the player
    #[inline]
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Check whether `candidate` would have produced this clue's feedback
    #[inline]
    #[must_use]
    pub fn admits(&self, candidate: &Code) -> bool {
        Score::calculate(candidate, &self.guess) == self.score
    }
}

fn parse_count(raw: &str) -> Result<u8, ClueError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|&n| n <= 4)
        .ok_or_else(|| ClueError::InvalidCount(raw.to_string()))
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phrase)
    }
}
