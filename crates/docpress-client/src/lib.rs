//! # docpress-client
//!
//! Client for the Notice block API and the article publisher built on it.
//!
//! - [`BlockStore`]: the four block operations the publisher needs
//! - [`NoticeClient`]: `reqwest` implementation of [`BlockStore`]
//! - [`Publisher`]: replaces a project's content with freshly grouped articles

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod publisher;
pub mod store;
pub mod types;

pub use client::NoticeClient;
pub use error::{Error, Result};
pub use publisher::{PublishSummary, Publisher};
pub use store::BlockStore;
pub use types::{BlockData, BlockRecord, NewBlock};
