//! Docpress Core — shared errors, configuration, and source input.
//!
//! This crate provides the foundational types used across all docpress crates.
//! It has no internal docpress dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Publish configuration (credentials, endpoint, section title)
//! - [`input`]: Reading the Markdown source document

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod input;

// Re-export key types at crate root for convenience
pub use config::{DEFAULT_BASE_URL, DEFAULT_SECTION_TITLE, PublishConfig};
pub use error::{Error, Result};
pub use input::{DEFAULT_SOURCE_PATH, read_source};
