//! Reading the Markdown source document.

use std::path::Path;

use crate::{Error, Result};

/// Source document read when no path is given.
pub const DEFAULT_SOURCE_PATH: &str = "README.md";

/// Reads the whole source document as UTF-8 text.
///
/// A missing file and a file that exists but cannot be read produce
/// different errors.
pub async fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::UnreadableInput {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Read source document");
    Ok(content)
}
