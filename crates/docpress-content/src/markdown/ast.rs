//! Markdown syntax tree.
//!
//! A small, closed set of node kinds covering what the block converter and
//! inline renderer care about. Child order is source order.

/// A parsed Markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level block nodes in source order.
    pub children: Vec<Node>,
}

/// One node of the Markdown syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A paragraph of inline content.
    Paragraph {
        /// Inline children.
        children: Vec<Node>,
    },
    /// An ATX or setext heading.
    Heading {
        /// Heading level, 1 through 6.
        depth: u8,
        /// Inline children.
        children: Vec<Node>,
    },
    /// A fenced or indented code block.
    Code {
        /// Raw contents without the final newline.
        value: String,
    },
    /// A bullet or ordered list.
    List {
        /// Whether the list is numbered.
        ordered: bool,
        /// `ListItem` children.
        children: Vec<Node>,
    },
    /// One list item.
    ListItem {
        /// Inline children (tight lists) or block children (loose lists).
        children: Vec<Node>,
    },
    /// A GFM table.
    Table {
        /// `TableRow` children, header row first.
        children: Vec<Node>,
    },
    /// One table row, header or body.
    TableRow {
        /// `TableCell` children.
        children: Vec<Node>,
    },
    /// One table cell.
    TableCell {
        /// Inline children.
        children: Vec<Node>,
    },
    /// Literal text.
    Text {
        /// The text, already unescaped.
        value: String,
    },
    /// Strong emphasis (`**x**`).
    Strong {
        /// Inline children.
        children: Vec<Node>,
    },
    /// Emphasis (`*x*`).
    Emphasis {
        /// Inline children.
        children: Vec<Node>,
    },
    /// GFM strikethrough (`~~x~~`).
    Delete {
        /// Inline children.
        children: Vec<Node>,
    },
    /// An inline link.
    Link {
        /// Link destination.
        url: String,
        /// Link text.
        children: Vec<Node>,
    },
    /// An inline image.
    Image {
        /// Image source.
        url: String,
        /// Alternative text.
        alt: String,
    },
    /// A code span.
    InlineCode {
        /// Raw code.
        value: String,
    },
    /// Raw HTML, block or inline.
    Html {
        /// Raw HTML.
        value: String,
    },
    /// A hard line break.
    Break,
    /// A thematic break (`---`).
    ThematicBreak,
    /// A block quote.
    Blockquote {
        /// Block children.
        children: Vec<Node>,
    },
    /// Any construct without a dedicated variant (footnote definitions,
    /// definition lists, metadata blocks, ...).
    Other {
        /// Children, if any.
        children: Vec<Node>,
    },
}

impl Node {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Returns the child list of container nodes, `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Table { children }
            | Node::TableRow { children }
            | Node::TableCell { children }
            | Node::Strong { children }
            | Node::Emphasis { children }
            | Node::Delete { children }
            | Node::Link { children, .. }
            | Node::Blockquote { children }
            | Node::Other { children } => Some(children),
            Node::Code { .. }
            | Node::Text { .. }
            | Node::Image { .. }
            | Node::InlineCode { .. }
            | Node::Html { .. }
            | Node::Break
            | Node::ThematicBreak => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Table { children }
            | Node::TableRow { children }
            | Node::TableCell { children }
            | Node::Strong { children }
            | Node::Emphasis { children }
            | Node::Delete { children }
            | Node::Link { children, .. }
            | Node::Blockquote { children }
            | Node::Other { children } => Some(children),
            Node::Code { .. }
            | Node::Text { .. }
            | Node::Image { .. }
            | Node::InlineCode { .. }
            | Node::Html { .. }
            | Node::Break
            | Node::ThematicBreak => None,
        }
    }
}
