//! Stable DTOs and IDs used across the biblint workspace.
//!
//! This crate is intentionally boring:
//! - the complaint record and its total order
//! - stable check names and the static check catalog
//! - canonical source path handling
//! - the serialized report envelope

#![forbid(unsafe_code)]

pub mod catalog;
pub mod complaint;
pub mod ids;
pub mod path;
pub mod receipt;

pub use catalog::{CATALOG, CheckDescriptor, Domain, Granularity, lookup_check};
pub use complaint::{Complaint, Location};
pub use path::SourcePath;
pub use receipt::{LintSummary, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta};
