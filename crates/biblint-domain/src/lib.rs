//! Pure bibliography linting (no IO).
//!
//! Input: a bibliography, optional citations and document words, all built elsewhere.
//! Output: a sorted complaint list + summary counts.

#![forbid(unsafe_code)]

pub mod checks;
pub mod error;
pub mod identifiers;
pub mod isbn;
pub mod model;
pub mod policy;
pub mod report;
pub mod scan;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checks::LocalCopies;
pub use engine::{LintInput, evaluate};
pub use error::CheckError;
