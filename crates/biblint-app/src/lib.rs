//! Use case orchestration for biblint.
//!
//! This crate provides the application layer: use cases that coordinate the settings, bib,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging setup and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod local;
mod render;

pub use check::{CheckInput, CheckOutput, report_exit_code, resolve, run_check};
pub use explain::{ExplainOutput, format_explanation, format_not_found, list_checks, run_explain};
pub use local::LocalDirProbe;
pub use render::{OutputFormat, render_report};
