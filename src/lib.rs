#![forbid(unsafe_code)]
//! Command-line front end for the enchantment registry.
//!
//! The registry itself (ids, display names, aliases, and the id/alias indexes) lives in `enchant_core`. This crate
//! adds what a user-facing tool needs on top: argument parsing, text/table/JSON rendering, a generated Markdown
//! reference, and "unknown enchantment" diagnostics with suggestions.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod render;
pub mod version;

pub use render::{OutputFormat, RenderConfig, render_list, render_record, render_reference};
