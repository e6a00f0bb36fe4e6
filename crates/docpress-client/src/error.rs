//! Error types for docpress-client

use thiserror::Error;

/// Result type alias for docpress-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the block API
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level HTTP failure (connect, timeout, bad body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{method} {path} failed with status {status}: {body}")]
    Api {
        /// Request method
        method: &'static str,
        /// Request path, relative to the base URL
        path: String,
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The API key contains characters not allowed in a header value
    #[error("API_KEY is not a valid header value")]
    InvalidApiKey,
}
