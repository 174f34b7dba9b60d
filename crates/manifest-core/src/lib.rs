//! Core library for the manifest generator
//!
//! Renders a Markdown manifest from a text template by substituting
//! `{{key}}` placeholder tokens with values drawn from a JSON config, with
//! structured formatting for the `results` section. The whole system is one
//! linear pipeline:
//!
//! ```text
//! load template -> load config -> format results -> substitute -> write
//! ```
//!
//! Every stage is fail-fast: the first validation or I/O failure aborts the
//! run before any output is written.

pub mod clean;
pub mod context;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod results;
pub mod template;

pub use clean::{CleanReport, CleanStatus, clean_artifacts};
pub use context::Context;
pub use error::{Error, Result};
pub use pipeline::{DEFAULT_TEMPLATE, GenerateOptions, generate};
