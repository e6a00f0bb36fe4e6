//! Inline text rendering.
//!
//! Inline nodes are flattened to a string using a small HTML vocabulary:
//! `<b>` for strong, `<i>` for emphasis, `<a href="...">` for links. Text is
//! emitted verbatim. Node kinds without a rendering (inline code, images,
//! strikethrough, raw HTML, line breaks, ...) produce nothing.
//!
//! # Example
//!
//! ```rust
//! use docpress_content::markdown::{parse_document, render_inline, Node};
//!
//! let document = parse_document("Some **bold** and [a link](https://example.com).");
//! let Node::Paragraph { children } = &document.children[0] else { unreachable!() };
//!
//! assert_eq!(
//!     render_inline(children),
//!     r#"Some <b>bold</b> and <a href="https://example.com">a link</a>."#
//! );
//! ```

use super::ast::Node;

/// Containers nested deeper than this render as empty.
pub const MAX_INLINE_DEPTH: usize = 128;

/// Render a sequence of inline nodes to formatted text.
pub fn render_inline(nodes: &[Node]) -> String {
    let mut out = String::new();
    render_into(&mut out, nodes, 0);
    out
}

/// Render each list item's children to one string per item.
pub fn render_list_items(items: &[Node]) -> Vec<String> {
    items.iter().map(render_children).collect()
}

/// Render table rows to a grid of cell strings. Header rows are not
/// distinguished from body rows.
pub fn render_table(rows: &[Node]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            row.children()
                .unwrap_or_default()
                .iter()
                .map(render_children)
                .collect()
        })
        .collect()
}

fn render_children(node: &Node) -> String {
    render_inline(node.children().unwrap_or_default())
}

fn render_into(out: &mut String, nodes: &[Node], depth: usize) {
    if depth > MAX_INLINE_DEPTH {
        return;
    }

    for node in nodes {
        match node {
            Node::Text { value } => out.push_str(value),
            Node::Paragraph { children } | Node::Heading { children, .. } => {
                render_into(out, children, depth + 1);
            }
            Node::Strong { children } => wrap(out, "<b>", "</b>", children, depth),
            Node::Emphasis { children } => wrap(out, "<i>", "</i>", children, depth),
            Node::Link { url, children } => {
                let open = format!("<a href=\"{url}\">");
                wrap(out, &open, "</a>", children, depth);
            }
            _ => {}
        }
    }
}

fn wrap(out: &mut String, open: &str, close: &str, children: &[Node], depth: usize) {
    out.push_str(open);
    render_into(out, children, depth + 1);
    out.push_str(close);
}
