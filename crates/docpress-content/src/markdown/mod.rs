//! Markdown parsing and inline rendering.
//!
//! - [`ast`]: the closed node tree the converter walks
//! - [`parser`]: builds that tree from `pulldown-cmark` events
//! - [`render`]: flattens inline nodes, list items, and table rows to strings

pub mod ast;
pub mod parser;
pub mod render;

pub use ast::{Document, Node};
pub use parser::parse_document;
pub use render::{render_inline, render_list_items, render_table};
