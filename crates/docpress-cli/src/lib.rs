//! # docpress-cli
//!
//! Publishes a Markdown README to Notice as a section of articles.
//!
//! The run is a fixed sequence of phases:
//! read → parse → convert → group → upload. Each phase announces itself
//! through a [`Reporter`], and the first failure ends the run.
//!
//! - [`cli`]: command-line arguments (flags with environment fallbacks)
//! - [`pipeline`]: the phase sequence
//! - [`report`]: progress notices and the final failure message

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod report;

pub use cli::Args;
pub use error::{Error, Result};
pub use pipeline::{Outcome, run};
pub use report::Reporter;
