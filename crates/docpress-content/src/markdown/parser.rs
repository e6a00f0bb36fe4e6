//! Markdown parsing into a [`Document`] tree.
//!
//! `pulldown-cmark` produces a flat stream of start/end events. This module
//! folds that stream into the nested [`Node`] tree with an explicit stack, so
//! parsing never recurses and never fails.
//!
//! # Example
//!
//! ```rust
//! use docpress_content::markdown::{parse_document, Node};
//!
//! let document = parse_document("## Install\n\nRun `cargo build`.");
//! assert!(matches!(document.children[0], Node::Heading { depth: 2, .. }));
//! assert!(matches!(document.children[1], Node::Paragraph { .. }));
//! ```

use std::sync::LazyLock;

use pulldown_cmark::{Event, Options, Parser, Tag};
use regex::Regex;

use super::ast::{Document, Node};

/// Bare URL candidates: `http://`, `https://`, or `www.` up to whitespace.
#[allow(clippy::expect_used)]
static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://|www\.)[^\s<]+").expect("Invalid bare URL regex")
});

/// Parse Markdown text (CommonMark plus GFM tables, strikethrough, task
/// lists, footnotes, and bare URL links) into a [`Document`].
pub fn parse_document(content: &str) -> Document {
    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(content, parser_options()) {
        builder.push_event(event);
    }

    let document = builder.finish();
    tracing::debug!(nodes = document.children.len(), "Parsed markdown document");
    document
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Stack machine turning start/end events into nested nodes.
#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    open: Vec<Node>,
}

impl TreeBuilder {
    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open.push(node_for_tag(tag)),
            Event::End(_) => self.close(),
            Event::Text(text) => self.push_text(&text),
            Event::SoftBreak => self.push_text("\n"),
            Event::HardBreak => self.attach(Node::Break),
            Event::Code(code) => self.attach(Node::InlineCode {
                value: code.into_string(),
            }),
            Event::Html(html) | Event::InlineHtml(html) => self.push_html(&html),
            Event::Rule => self.attach(Node::ThematicBreak),
            // Footnote references, task list markers, math
            _ => {}
        }
    }

    fn finish(mut self) -> Document {
        while !self.open.is_empty() {
            self.close();
        }
        Document {
            children: self.root,
        }
    }

    fn close(&mut self) {
        let Some(mut node) = self.open.pop() else {
            return;
        };

        if let Node::Code { value } | Node::Html { value } = &mut node
            && value.ends_with('\n')
        {
            value.pop();
        }

        if !matches!(node, Node::Link { .. })
            && !self.inside_link()
            && let Some(children) = node.children_mut()
        {
            link_bare_urls(children);
        }

        self.attach(node);
    }

    /// Literal text goes into the open code block, HTML block, or image alt;
    /// anywhere else it becomes a text node, merged with a preceding one.
    fn push_text(&mut self, text: &str) {
        match self.open.last_mut() {
            Some(Node::Code { value } | Node::Html { value }) => value.push_str(text),
            Some(Node::Image { alt, .. }) => alt.push_str(text),
            Some(parent) => {
                if let Some(children) = parent.children_mut() {
                    push_merged_text(children, text);
                }
            }
            None => push_merged_text(&mut self.root, text),
        }
    }

    fn inside_link(&self) -> bool {
        self.open.iter().any(|node| matches!(node, Node::Link { .. }))
    }

    fn push_html(&mut self, html: &str) {
        if let Some(Node::Html { value }) = self.open.last_mut() {
            value.push_str(html);
        } else {
            self.attach(Node::Html {
                value: html.to_string(),
            });
        }
    }

    /// Nodes closing inside a leaf (e.g. emphasis in image alt text) are dropped.
    fn attach(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => {
                if let Some(children) = parent.children_mut() {
                    children.push(node);
                }
            }
            None => self.root.push(node),
        }
    }
}

fn push_merged_text(children: &mut Vec<Node>, text: &str) {
    if let Some(Node::Text { value }) = children.last_mut() {
        value.push_str(text);
    } else {
        children.push(Node::text(text));
    }
}

/// Replace bare URLs in text children with link nodes, the way GFM
/// autolinks them.
fn link_bare_urls(children: &mut Vec<Node>) {
    let has_candidate = children
        .iter()
        .any(|node| matches!(node, Node::Text { value } if BARE_URL.is_match(value)));
    if !has_candidate {
        return;
    }

    let mut linked = Vec::with_capacity(children.len());
    for child in children.drain(..) {
        match child {
            Node::Text { value } => split_bare_urls(&value, &mut linked),
            other => linked.push(other),
        }
    }
    *children = linked;
}

fn split_bare_urls(text: &str, out: &mut Vec<Node>) {
    let mut copied = 0;
    for found in BARE_URL.find_iter(text) {
        let start = found.start();
        if !opens_bare_url(&text[..start]) {
            continue;
        }

        let literal = trim_url_tail(found.as_str());
        let (url, host) = match literal.strip_prefix("www.") {
            Some(host) => (format!("http://{literal}"), host),
            None => (
                literal.to_string(),
                literal.split_once("://").map_or("", |(_, host)| host),
            ),
        };
        if host.is_empty() {
            continue;
        }

        if start > copied {
            out.push(Node::text(&text[copied..start]));
        }
        out.push(Node::Link {
            url,
            children: vec![Node::text(literal)],
        });
        copied = start + literal.len();
    }

    if copied < text.len() {
        out.push(Node::text(&text[copied..]));
    }
}

/// A bare URL starts a line or follows whitespace or `*`, `_`, `~`, `(`.
fn opens_bare_url(before: &str) -> bool {
    match before.chars().next_back() {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '*' | '_' | '~' | '('),
    }
}

/// Trailing punctuation and an unbalanced `)` are not part of the URL.
fn trim_url_tail(literal: &str) -> &str {
    let mut end = literal.len();
    loop {
        let candidate = &literal[..end];
        match candidate.chars().next_back() {
            Some('?' | '!' | '.' | ',' | ':' | '*' | '_' | '~') => end -= 1,
            Some(')') if candidate.matches(')').count() > candidate.matches('(').count() => {
                end -= 1
            }
            _ => return candidate,
        }
    }
}

fn node_for_tag(tag: Tag<'_>) -> Node {
    let children = Vec::new();
    match tag {
        Tag::Paragraph => Node::Paragraph { children },
        Tag::Heading { level, .. } => Node::Heading {
            depth: level as u8,
            children,
        },
        Tag::BlockQuote(_) => Node::Blockquote { children },
        Tag::CodeBlock(_) => Node::Code {
            value: String::new(),
        },
        Tag::HtmlBlock => Node::Html {
            value: String::new(),
        },
        Tag::List(start) => Node::List {
            ordered: start.is_some(),
            children,
        },
        Tag::Item => Node::ListItem { children },
        Tag::Table(_) => Node::Table { children },
        // The header row has no row tag of its own; it is a row like the rest.
        Tag::TableHead | Tag::TableRow => Node::TableRow { children },
        Tag::TableCell => Node::TableCell { children },
        Tag::Emphasis => Node::Emphasis { children },
        Tag::Strong => Node::Strong { children },
        Tag::Strikethrough => Node::Delete { children },
        Tag::Link { dest_url, .. } => Node::Link {
            url: dest_url.into_string(),
            children,
        },
        Tag::Image { dest_url, .. } => Node::Image {
            url: dest_url.into_string(),
            alt: String::new(),
        },
        _ => Node::Other { children },
    }
}

// ============================================================================
// Tests
// ============================================================================
