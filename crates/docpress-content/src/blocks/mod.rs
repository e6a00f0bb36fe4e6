//! Output blocks and the document → block converter.
//!
//! - [`model`]: the block kinds and their wire format
//! - [`convert`]: one block per recognised top-level Markdown construct

pub mod convert;
pub mod model;

pub use convert::convert_blocks;
pub use model::{Block, ImageFile, ListStyle};
