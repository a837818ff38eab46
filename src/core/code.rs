//! Secret code representation
//!
//! A Code is an ordered sequence of 4 distinct decimal digits whose first digit
//! is non-zero. Codes are validated once at construction and immutable afterwards.

use std::fmt;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// A valid 4-digit Mastermind code
///
/// Ordering is lexicographic on the digits, which matches the canonical
/// enumeration order used by the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    NonDigit(char),
    LeadingZero,
    RepeatedDigit(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::NonDigit(ch) => write!(f, "Code contains a non-digit character '{ch}'"),
            Self::LeadingZero => write!(f, "Code must not start with 0"),
            Self::RepeatedDigit(digit) => write!(f, "Digit {digit} appears more than once"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a code from a string such as `"1234"`
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `CodeError` if the input is not 4 decimal digits, starts with 0,
    /// or repeats a digit.
    ///
    /// # Examples
    /// ```
    /// use mastermind_puzzle::core::Code;
    ///
    /// let code = Code::new("1234").unwrap();
    /// assert_eq!(code.digits(), &[1, 2, 3, 4]);
    ///
    /// assert!(Code::new("0123").is_err());
    /// assert!(Code::new("1123").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let text = text.trim();
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            *slot = ch
                .to_digit(10)
                .map(|d| d as u8)
                .ok_or(CodeError::NonDigit(ch))?;
        }

        Self::from_digits(digits)
    }

    /// Build a code from raw digits
    ///
    /// # Errors
    /// Returns `CodeError` if a value is above 9, the first digit is 0,
    /// or a digit repeats.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(CodeError::NonDigit(char::from(b'0'.saturating_add(bad))));
        }
        if digits[0] == 0 {
            return Err(CodeError::LeadingZero);
        }
        if let Some(repeated) = first_repeated(&digits) {
            return Err(CodeError::RepeatedDigit(repeated));
        }

        Ok(Self(digits))
    }

    /// Get the digits of the code
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the code contains a digit at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

/// Find the first digit that occurs more than once
fn first_repeated(digits: &[u8]) -> Option<u8> {
    let mut seen = [false; 10];
    for &d in digits {
        let slot = &mut seen[usize::from(d)];
        if *slot {
            return Some(d);
        }
        *slot = true;
    }
    None
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
