#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! casetree: turn a test-management export into a tree of Markdown documents.
//!
//! Each suite becomes a directory named after its sanitized title, each case
//! a numbered subdirectory (`0001`, `0002`, ...) holding `case.mdx`, and
//! suites with a description or preconditions get a `README.md`.

pub const CASETREE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod loader;
pub mod materialize;
pub mod render;
pub mod sanitize;

pub use config::{ExportConfig, Labels};
pub use error::{ErrorKind, ExportError};
pub use loader::load_document;
pub use materialize::{ExportStats, Materializer, export_document, run};
pub use render::{render_case, render_suite_readme};
pub use sanitize::clean_segment;
