//! The publish run: read → parse → convert → group → upload.

use docpress_client::{NoticeClient, PublishSummary, Publisher};
use docpress_content::{convert_blocks, group_articles, parse_document};
use docpress_core::read_source;

use crate::{Args, Reporter, Result};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Articles were uploaded.
    Published(PublishSummary),
    /// Nothing was uploaded; the grouped articles as pretty JSON.
    DryRun(String),
}

/// Execute one run.
///
/// Credentials are validated before the source is read, unless this is a
/// dry run, which needs none.
pub async fn run(args: &Args, reporter: &Reporter) -> Result<Outcome> {
    let config = if args.dry_run {
        None
    } else {
        Some(args.publish_config()?)
    };

    reporter.notice(&format!("Reading {}", args.input.display()));
    let content = read_source(&args.input).await?;

    reporter.notice("Parsing markdown");
    let document = parse_document(&content);

    reporter.notice("Convert markdown to blocks");
    let blocks = convert_blocks(&document);

    reporter.notice("Group blocks by article");
    let articles = group_articles(blocks);

    let Some(config) = config else {
        return Ok(Outcome::DryRun(serde_json::to_string_pretty(&articles)?));
    };

    reporter.notice("Upload blocks to Notice");
    let client = NoticeClient::new(&config)?;
    let publisher = Publisher::new(client, config.section_title.as_str());
    let summary = publisher.publish(&config.project_id, &articles).await?;

    Ok(Outcome::Published(summary))
}
