use palette::rgb::FromHexError;
use thiserror::Error;

/// Errors that abort a palette pick. No partial result is produced.
#[derive(Debug, Error)]
pub enum PickError {
    #[error("Invalid subset size {size}: must be at least 2 and at most {available}")]
    InvalidSubsetSize { size: usize, available: usize },

    #[error("No colours remain after filtering")]
    EmptyResult,

    #[error("Only {remaining} colour remains after filtering, at least 2 are needed")]
    InsufficientCandidates { remaining: usize },

    #[error("Invalid colour {input:?}: {source}")]
    InvalidColour {
        input: String,
        #[source]
        source: FromHexError,
    },

    #[error("Invalid {name} threshold {value}: must lie within 0..=1")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Repetition count must be positive")]
    InvalidRepetitions,

    #[error("Requested palette count must be positive")]
    InvalidReturnCount,
}
