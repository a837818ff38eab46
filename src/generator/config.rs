//! Generation settings

/// Configuration for puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Clues required before verification
    pub num_clues: usize,
    /// Guess draws attempted before giving up on filling a clue set
    pub clue_attempts: usize,
    /// Full puzzle attempts before reporting failure
    pub max_attempts: usize,
    /// Raw draws allowed when sampling a single code
    pub max_code_draws: usize,
}

impl GeneratorConfig {
    pub const DEFAULT_NUM_CLUES: usize = 6;
    pub const DEFAULT_CLUE_ATTEMPTS: usize = 1000;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;
    pub const DEFAULT_MAX_CODE_DRAWS: usize = 10_000;

    #[must_use]
    pub const fn new(num_clues: usize) -> Self {
        Self {
            num_clues,
            clue_attempts: Self::DEFAULT_CLUE_ATTEMPTS,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            max_code_draws: Self::DEFAULT_MAX_CODE_DRAWS,
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NUM_CLUES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.num_clues, 6);
        assert_eq!(config.clue_attempts, 1000);
        assert_eq!(config.max_attempts, 10_000);
    }

    #[test]
    fn with_max_attempts_keeps_other_fields() {
        let config = GeneratorConfig::new(4).with_max_attempts(7);
        assert_eq!(config.num_clues, 4);
        assert_eq!(config.max_attempts, 7);
        assert_eq!(config.clue_attempts, GeneratorConfig::DEFAULT_CLUE_ATTEMPTS);
    }
}
