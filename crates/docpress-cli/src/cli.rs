//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use docpress_core::{
    DEFAULT_BASE_URL, DEFAULT_SECTION_TITLE, DEFAULT_SOURCE_PATH, PublishConfig, Result,
};

/// Publish a Markdown README to Notice as structured articles
#[derive(Parser, Debug, Clone)]
#[command(name = "docpress")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Markdown file to publish
    #[arg(short, long, default_value = DEFAULT_SOURCE_PATH)]
    pub input: PathBuf,

    /// Notice API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Project block to replace
    #[arg(long, env = "PROJECT_ID")]
    pub project_id: Option<String>,

    /// Block API endpoint
    #[arg(long, env = "DOCPRESS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Title of the section holding the articles
    #[arg(long, default_value = DEFAULT_SECTION_TITLE)]
    pub section_title: String,

    /// Print the grouped articles as JSON instead of uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Validated publish configuration. Fails when credentials are missing.
    pub fn publish_config(&self) -> Result<PublishConfig> {
        Ok(
            PublishConfig::new(self.api_key.clone(), self.project_id.clone())?
                .with_base_url(self.base_url.as_str())
                .with_section_title(self.section_title.as_str()),
        )
    }
}
