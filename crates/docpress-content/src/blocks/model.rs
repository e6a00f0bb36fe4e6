//! Block model shared with the remote content store.
//!
//! Every block serializes as `{"type": <kind>, "data": {...}}`, matching the
//! store's block schema.

use serde::{Deserialize, Serialize};

/// One unit of structured content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Block {
    /// Formatted paragraph text.
    Paragraph {
        /// Inline-rendered text.
        text: String,
    },
    /// A heading.
    Header {
        /// Inline-rendered heading text.
        text: String,
        /// Heading level, 1 through 6.
        level: u8,
    },
    /// A code block.
    Code {
        /// Raw code, no language tag.
        code: String,
    },
    /// A flat list.
    List {
        /// Numbered or bulleted.
        style: ListStyle,
        /// One rendered string per item.
        items: Vec<String>,
    },
    /// A table, header row included as the first row.
    Table {
        /// Rows of rendered cell strings.
        content: Vec<Vec<String>>,
    },
    /// An image.
    Image {
        /// Image location.
        file: ImageFile,
        /// Always `false`.
        stretched: bool,
        /// Always `false`.
        #[serde(rename = "withBackground")]
        with_background: bool,
        /// Always `false`.
        #[serde(rename = "withBorder")]
        with_border: bool,
    },
}

/// List numbering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Numbered list.
    Ordered,
    /// Bulleted list.
    Unordered,
}

/// Location of an image block's file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFile {
    /// Image URL, as written in the source.
    pub url: String,
}

impl Block {
    /// Creates a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Creates a header block.
    pub fn header(text: impl Into<String>, level: u8) -> Self {
        Block::Header {
            text: text.into(),
            level,
        }
    }

    /// Creates a code block.
    pub fn code(code: impl Into<String>) -> Self {
        Block::Code { code: code.into() }
    }

    /// Creates a list block.
    pub fn list(style: ListStyle, items: Vec<String>) -> Self {
        Block::List { style, items }
    }

    /// Creates a table block.
    pub fn table(content: Vec<Vec<String>>) -> Self {
        Block::Table { content }
    }

    /// Creates an image block with all display flags off.
    pub fn image(url: impl Into<String>) -> Self {
        Block::Image {
            file: ImageFile { url: url.into() },
            stretched: false,
            with_background: false,
            with_border: false,
        }
    }
}

impl ListStyle {
    /// Style for a list with the given `ordered` flag.
    pub fn from_ordered(ordered: bool) -> Self {
        if ordered {
            ListStyle::Ordered
        } else {
            ListStyle::Unordered
        }
    }
}
