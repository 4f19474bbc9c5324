//! Error types for demo data generation.

use thiserror::Error;

/// Errors raised while generating client accounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The seed name was empty once trimmed.
    #[error("seed name must not be empty")]
    EmptySeedName,

    /// More client accounts were requested than the generator supports.
    #[error("client count {requested} exceeds the maximum of {max}")]
    TooManyClients { requested: usize, max: usize },
}
