//! Generation failures

use std::fmt;

/// Error type for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Rejection sampling of a single code never produced a valid draw
    CodeDrawsExhausted { draws: usize },
    /// No attempt produced a uniquely solvable puzzle
    AttemptsExhausted { attempts: usize },
    /// The configuration cannot produce a puzzle
    InvalidConfig(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeDrawsExhausted { draws } => {
                write!(f, "No valid code drawn after {draws} draws")
            }
            Self::AttemptsExhausted { attempts } => {
                write!(f, "Unable to construct a unique puzzle after {attempts} attempts")
            }
            Self::InvalidConfig(reason) => write!(f, "Invalid generator configuration: {reason}"),
        }
    }
}

impl std::error::Error for GenerationError {}
