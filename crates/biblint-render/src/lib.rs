//! Renderers for lint results: plain text, editor quickfix, JSON.
//!
//! All output is deterministic for a given report; complaints are printed in the
//! order they arrive, which is already sorted.

#![forbid(unsafe_code)]

mod json;
mod model;
mod quickfix;
mod text;

#[cfg(test)]
mod test_support;

pub use json::render_json;
pub use model::{RenderableComplaint, RenderableData, RenderableReport};
pub use quickfix::render_quickfix;
pub use text::render_text;
