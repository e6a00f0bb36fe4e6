//! Error types for docpress-core.

use std::path::PathBuf;

/// Errors that can occur before any content reaches the remote API.
///
/// Covers the configuration and input failures of a publish run. Network
/// failures live in `docpress-client`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Required configuration is missing or invalid
    #[error("{message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// The Markdown source file does not exist
    #[error("{} is missing!", path.display())]
    MissingInput {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The Markdown source file exists but could not be read as UTF-8 text
    #[error("{} file cannot be read!", path.display())]
    UnreadableInput {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Convenience `Result` type alias for docpress operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
