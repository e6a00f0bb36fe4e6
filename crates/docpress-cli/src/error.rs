//! Error types for docpress-cli

use thiserror::Error;

/// Result type alias for docpress-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can end a run
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration or input error
    #[error(transparent)]
    Core(#[from] docpress_core::Error),

    /// Remote API error
    #[error(transparent)]
    Client(#[from] docpress_client::Error),

    /// Dry-run output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
