//! Command implementations

pub mod batch;
pub mod generate;
pub mod score;
pub mod verify;

pub use batch::{BatchConfig, BatchResult, run_batch};
pub use generate::{GenerateConfig, make_rng, run_generate};
pub use score::score_codes;
pub use verify::{VerifyResult, verify_clues};
