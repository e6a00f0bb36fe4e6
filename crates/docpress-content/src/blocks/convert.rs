//! Document → block conversion.
//!
//! Each top-level node maps to at most one [`Block`]. Constructs with no
//! block counterpart (block quotes, raw HTML, thematic breaks, footnote
//! definitions) are dropped without error.

use crate::markdown::render::{render_inline, render_list_items, render_table};
use crate::markdown::{Document, Node};

use super::model::{Block, ListStyle};

/// Convert the top-level nodes of a document into blocks, in source order.
pub fn convert_blocks(document: &Document) -> Vec<Block> {
    let blocks: Vec<Block> = document.children.iter().filter_map(convert_node).collect();

    tracing::debug!(
        nodes = document.children.len(),
        blocks = blocks.len(),
        "Converted markdown to blocks"
    );
    blocks
}

fn convert_node(node: &Node) -> Option<Block> {
    match node {
        // A paragraph that opens with an image is an image block; anything
        // after the image is discarded.
        Node::Paragraph { children } => match children.first() {
            Some(Node::Image { url, .. }) => Some(Block::image(url.clone())),
            _ => Some(Block::paragraph(render_inline(children))),
        },
        Node::Heading { depth, children } => Some(Block::header(render_inline(children), *depth)),
        Node::Code { value } => Some(Block::code(value.clone())),
        Node::List { ordered, children } => Some(Block::list(
            ListStyle::from_ordered(*ordered),
            render_list_items(children),
        )),
        Node::Table { children } => Some(Block::table(render_table(children))),
        _ => None,
    }
}
