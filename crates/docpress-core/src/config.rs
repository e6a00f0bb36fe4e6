//! Publish configuration.
//!
//! Credentials and the target project are supplied by the caller (the CLI
//! reads them from flags or the process environment) and validated here, so
//! nothing below the binary touches ambient global state.

use std::fmt;

use crate::{Error, Result};

/// Base endpoint of the Notice block API.
pub const DEFAULT_BASE_URL: &str = "https://bms.notice.studio";

/// Title of the section block that holds the published articles.
pub const DEFAULT_SECTION_TITLE: &str = "Documentation";

/// Validated settings for one publish run.
#[derive(Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Identifier of the project block whose children are replaced.
    pub project_id: String,
    /// Base URL of the block API, without trailing slash.
    pub base_url: String,
    /// Title of the section created under the project.
    pub section_title: String,
}

impl PublishConfig {
    /// Builds a configuration from optional raw values.
    ///
    /// Missing or blank values are rejected. The API key is checked before
    /// the project id, so a run with neither reports the key.
    pub fn new(api_key: Option<String>, project_id: Option<String>) -> Result<Self> {
        let api_key = required(api_key).ok_or_else(|| Error::config("No API_KEY!"))?;
        let project_id = required(project_id).ok_or_else(|| Error::config("No PROJECT_ID!"))?;

        Ok(Self {
            api_key,
            project_id,
            base_url: DEFAULT_BASE_URL.to_string(),
            section_title: DEFAULT_SECTION_TITLE.to_string(),
        })
    }

    /// Overrides the API base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the section title.
    pub fn with_section_title(mut self, title: impl Into<String>) -> Self {
        self.section_title = title.into();
        self
    }
}

impl fmt::Debug for PublishConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishConfig")
            .field("api_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .field("section_title", &self.section_title)
            .finish()
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_both_values() {
        let config = PublishConfig::new(Some("key".into()), Some("proj".into())).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.project_id, "proj");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.section_title, DEFAULT_SECTION_TITLE);
    }

    #[test]
    fn test_missing_api_key() {
        let err = PublishConfig::new(None, Some("proj".into())).unwrap_err();
        assert_eq!(err.to_string(), "No API_KEY!");
    }

    #[test]
    fn test_missing_project_id() {
        let err = PublishConfig::new(Some("key".into()), None).unwrap_err();
        assert_eq!(err.to_string(), "No PROJECT_ID!");
    }

    #[test]
    fn test_api_key_checked_first() {
        let err = PublishConfig::new(None, None).unwrap_err();
        assert_eq!(err.to_string(), "No API_KEY!");
    }

    #[test]
    fn test_blank_values_are_missing() {
        let err = PublishConfig::new(Some("   ".into()), Some("proj".into())).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = PublishConfig::new(Some("key".into()), Some(String::new())).unwrap_err();
        assert_eq!(err.to_string(), "No PROJECT_ID!");
    }

    #[test]
    fn test_overrides() {
        let config = PublishConfig::new(Some("key".into()), Some("proj".into()))
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/")
            .with_section_title("Docs");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.section_title, "Docs");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = PublishConfig::new(Some("s3cret".into()), Some("proj".into())).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("proj"));
    }
}
