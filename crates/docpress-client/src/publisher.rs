//! Replace-style publishing of articles.
//!
//! A publish run wipes the project's existing children, creates one section,
//! then creates each article under it and attaches its blocks. Steps run one
//! at a time in order. The first failure aborts the run and nothing already
//! applied is rolled back, so a failed run can leave the project partially
//! cleared.

use docpress_content::Article;

use crate::Result;
use crate::store::BlockStore;
use crate::types::NewBlock;

/// Block type of the container created under the project.
const SECTION_KIND: &str = "section";

/// Counts of what a publish run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishSummary {
    /// Previous child blocks deleted from the project.
    pub removed: usize,
    /// Article blocks created.
    pub articles: usize,
    /// Content blocks attached across all articles.
    pub blocks: usize,
}

/// Publishes grouped articles to a [`BlockStore`].
pub struct Publisher<S> {
    store: S,
    section_title: String,
}

impl<S: BlockStore> Publisher<S> {
    /// Create a publisher that files articles under a section titled
    /// `section_title`.
    pub fn new(store: S, section_title: impl Into<String>) -> Self {
        Self {
            store,
            section_title: section_title.into(),
        }
    }

    /// Replace the content of `project_id` with `articles`.
    pub async fn publish(&self, project_id: &str, articles: &[Article]) -> Result<PublishSummary> {
        let mut summary = PublishSummary::default();

        let project = self.store.get_block(project_id).await?;
        tracing::debug!(project = %project.id, children = project.children.len(), "Fetched project");

        for child in &project.children {
            self.store.delete_block(child).await?;
            summary.removed += 1;
        }

        let section = self
            .store
            .create_block(&NewBlock::titled(
                SECTION_KIND,
                self.section_title.as_str(),
                project.id.as_str(),
            ))
            .await?;
        tracing::debug!(section = %section.id, title = %self.section_title, "Created section");

        for article in articles {
            let created = self
                .store
                .create_block(&NewBlock::titled(
                    article.kind(),
                    article.title(),
                    section.id.as_str(),
                ))
                .await?;
            summary.articles += 1;

            if article.has_blocks() {
                self.store.put_blocks(&created.id, &article.blocks).await?;
                summary.blocks += article.blocks.len();
            }

            tracing::debug!(
                article = %created.id,
                title = %article.title(),
                blocks = article.blocks.len(),
                "Published article"
            );
        }

        tracing::info!(
            removed = summary.removed,
            articles = summary.articles,
            blocks = summary.blocks,
            "Publish complete"
        );
        Ok(summary)
    }
}

// ============================================================================
// Tests
// ============================================================================
