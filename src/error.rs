//! Crate-level error types.

use crate::config::ConfigError;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for harness and demo operations.
pub type PrimerResult<T> = Result<T, PrimerError>;

/// Errors surfaced to the binaries.
#[derive(Debug, Error)]
pub enum PrimerError {
    /// No bound argument was supplied.
    #[error("missing bound argument: expected a non-negative integer")]
    MissingBound,

    /// The bound argument is not a non-negative integer.
    #[error("invalid bound '{input}': {source}")]
    InvalidBound {
        /// Raw argument as given on the command line.
        input: String,
        /// Underlying parse error.
        #[source]
        source: ParseIntError,
    },

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the report failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
