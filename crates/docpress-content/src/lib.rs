//! Markdown to article-block conversion.
//!
//! This crate turns one Markdown document into the block model consumed by
//! the remote content store. It is pure: no I/O, no errors.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown parsing into a closed AST, inline rendering
//!   - [`markdown::parser`]: pulldown-cmark event stream → [`Document`]
//!   - [`markdown::render`]: inline text, list item, and table flattening
//! - [`blocks`]: Output block model and the document → block converter
//! - [`articles`]: Grouping blocks into articles by heading level
//!
//! # Example
//!
//! ```rust
//! use docpress_content::{convert_blocks, group_articles, parse_document};
//!
//! let document = parse_document("# Title\n\nSome **bold** text.\n");
//! let blocks = convert_blocks(&document);
//! let articles = group_articles(blocks);
//!
//! assert_eq!(articles.len(), 1);
//! assert_eq!(articles[0].title(), "Title");
//! ```

#![forbid(unsafe_code)]

pub mod articles;
pub mod blocks;
pub mod markdown;

// Re-export commonly used types
pub use articles::{Article, OVERVIEW_TITLE, group_articles};
pub use blocks::{Block, ImageFile, ListStyle, convert_blocks};
pub use markdown::{Document, Node, parse_document};
