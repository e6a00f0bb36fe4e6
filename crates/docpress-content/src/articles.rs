//! Grouping blocks into articles.
//!
//! Level 1 and 2 headers split the document into articles and become the
//! article titles. Deeper headers stay in the article as ordinary content.
//! Content before the first header lands in an implicit "Overview" article.
//!
//! # Example
//!
//! ```rust
//! use docpress_content::{group_articles, Block};
//!
//! let articles = group_articles(vec![
//!     Block::paragraph("intro"),
//!     Block::header("Usage", 2),
//!     Block::header("Flags", 3),
//! ]);
//!
//! assert_eq!(articles[0].title(), "Overview");
//! assert_eq!(articles[1].title(), "Usage");
//! assert_eq!(articles[1].blocks, vec![Block::header("Flags", 3)]);
//! ```

use serde::{Deserialize, Serialize};

use crate::blocks::Block;

/// Title of the article holding content that precedes the first header.
pub const OVERVIEW_TITLE: &str = "Overview";

/// Headers at or above this level start a new article.
pub const ARTICLE_BREAK_LEVEL: u8 = 2;

/// A titled run of blocks, one per top-level document section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "type")]
    kind: ArticleKind,

    /// Article title.
    pub data: ArticleData,

    /// Article content; omitted from the wire format when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

/// Title payload of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleData {
    /// Inline-rendered title text.
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ArticleKind {
    Article,
}

impl Article {
    /// Creates an empty article.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            kind: ArticleKind::Article,
            data: ArticleData { text: title.into() },
            blocks: Vec::new(),
        }
    }

    /// Block type used when creating the article remotely.
    pub fn kind(&self) -> &'static str {
        match self.kind {
            ArticleKind::Article => "article",
        }
    }

    /// The article title.
    pub fn title(&self) -> &str {
        &self.data.text
    }

    /// Whether the article has any content blocks.
    pub fn has_blocks(&self) -> bool {
        !self.blocks.is_empty()
    }
}

/// Partition blocks into articles.
///
/// Boundary headers are consumed as titles and never appear in any
/// article's blocks. Block and article order follow the input.
pub fn group_articles(blocks: Vec<Block>) -> Vec<Article> {
    let mut articles = Vec::new();
    // A leading level 3+ header is content, so it also needs the overview.
    if !blocks.first().is_some_and(is_boundary) {
        articles.push(Article::new(OVERVIEW_TITLE));
    }

    for block in blocks {
        match block {
            Block::Header { text, level } if level <= ARTICLE_BREAK_LEVEL => {
                articles.push(Article::new(text));
            }
            block => {
                if let Some(article) = articles.last_mut() {
                    article.blocks.push(block);
                }
            }
        }
    }

    tracing::debug!(articles = articles.len(), "Grouped blocks into articles");
    articles
}

fn is_boundary(block: &Block) -> bool {
    matches!(block, Block::Header { level, .. } if *level <= ARTICLE_BREAK_LEVEL)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::blocks::ListStyle;
    use proptest::prelude::*;
    use serde_json::json;

    // ------------------------------------------------------------------------
    // group_articles tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_empty_input_yields_overview() {
        let articles = group_articles(Vec::new());
        assert_eq!(articles, vec![Article::new(OVERVIEW_TITLE)]);
        assert!(!articles[0].has_blocks());
    }

    #[test]
    fn test_leading_content_goes_to_overview() {
        let articles = group_articles(vec![
            Block::paragraph("intro"),
            Block::header("Install", 1),
            Block::code("cargo install"),
        ]);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title(), OVERVIEW_TITLE);
        assert_eq!(articles[0].blocks, vec![Block::paragraph("intro")]);
        assert_eq!(articles[1].title(), "Install");
        assert_eq!(articles[1].blocks, vec![Block::code("cargo install")]);
    }

    #[test]
    fn test_no_overview_when_first_block_is_header() {
        let articles = group_articles(vec![Block::header("Title", 1), Block::paragraph("x")]);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title(), "Title");
    }

    #[test]
    fn test_leading_deep_header_stays_as_content() {
        let articles = group_articles(vec![Block::header("Note", 3), Block::paragraph("x")]);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title(), OVERVIEW_TITLE);
        assert_eq!(
            articles[0].blocks,
            vec![Block::header("Note", 3), Block::paragraph("x")]
        );
    }

    #[test]
    fn test_deep_headers_are_content() {
        let articles = group_articles(vec![
            Block::header("Guide", 2),
            Block::header("Step 1", 3),
            Block::paragraph("do it"),
            Block::header("Detail", 6),
        ]);
        assert_eq!(articles.len(), 1);
        assert_eq!(
            articles[0].blocks,
            vec![
                Block::header("Step 1", 3),
                Block::paragraph("do it"),
                Block::header("Detail", 6),
            ]
        );
    }

    #[test]
    fn test_consecutive_boundaries_make_empty_articles() {
        let articles = group_articles(vec![Block::header("A", 1), Block::header("B", 2)]);
        assert_eq!(articles.len(), 2);
        assert!(!articles[0].has_blocks());
        assert!(!articles[1].has_blocks());
    }

    // ------------------------------------------------------------------------
    // Wire format
    // ------------------------------------------------------------------------

    #[test]
    fn test_article_without_blocks_omits_field() {
        let value = serde_json::to_value(Article::new("Overview")).unwrap();
        assert_eq!(value, json!({"type": "article", "data": {"text": "Overview"}}));
    }

    #[test]
    fn test_article_with_blocks() {
        let mut article = Article::new("Usage");
        article.blocks.push(Block::paragraph("run it"));
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "article",
                "data": {"text": "Usage"},
                "blocks": [{"type": "paragraph", "data": {"text": "run it"}}]
            })
        );
        assert_eq!(article.kind(), "article");
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    fn content_block() -> impl Strategy<Value = Block> {
        prop_oneof![
            "[a-z ]{0,12}".prop_map(Block::paragraph),
            "[a-z]{0,8}".prop_map(Block::code),
            prop::collection::vec("[a-z]{1,5}", 0..4)
                .prop_map(|items| Block::list(ListStyle::Unordered, items)),
            "[a-z]{1,8}".prop_map(Block::image),
        ]
    }

    fn any_block() -> impl Strategy<Value = Block> {
        prop_oneof![
            3 => content_block(),
            1 => ("[A-Z][a-z]{0,8}", 1u8..=6).prop_map(|(text, level)| Block::header(text, level)),
        ]
    }

    proptest! {
        #[test]
        fn prop_header_free_input_is_one_overview(blocks in prop::collection::vec(content_block(), 0..20)) {
            let articles = group_articles(blocks.clone());
            prop_assert_eq!(articles.len(), 1);
            prop_assert_eq!(articles[0].title(), OVERVIEW_TITLE);
            prop_assert_eq!(&articles[0].blocks, &blocks);
        }

        #[test]
        fn prop_boundaries_consumed_and_order_preserved(blocks in prop::collection::vec(any_block(), 0..30)) {
            let articles = group_articles(blocks.clone());

            let boundaries: Vec<&Block> = blocks.iter().filter(|b| is_boundary(b)).collect();
            let content: Vec<&Block> = blocks.iter().filter(|b| !is_boundary(b)).collect();

            let seeded = usize::from(!blocks.first().is_some_and(is_boundary));
            prop_assert_eq!(articles.len(), boundaries.len() + seeded);

            for (article, boundary) in articles.iter().skip(seeded).zip(&boundaries) {
                let Block::Header { text, .. } = boundary else { unreachable!() };
                prop_assert_eq!(article.title(), text.as_str());
            }

            let flattened: Vec<&Block> = articles.iter().flat_map(|a| a.blocks.iter()).collect();
            prop_assert_eq!(flattened, content);
        }
    }
}
