//! Input adapters: read bibliography and document files and turn them into the domain model.
//!
//! This crate is allowed to read files. The parsers themselves work on text and never fail;
//! only reading can.

#![forbid(unsafe_code)]

pub mod parse;
pub mod tex;

use anyhow::Context;
use biblint_domain::model::{Bibliography, Citations, Document};
use biblint_types::{Complaint, SourcePath};
use camino::{Utf8Path, Utf8PathBuf};

pub use parse::{ParsedFile, parse_bibliography};
pub use tex::{extract_words, scan_citations};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a bibliography file. **Never panics** on any input.
    pub fn parse_bibliography(text: &str) -> ParsedFile {
        super::parse_bibliography(&SourcePath::new("fuzz.bib"), text)
    }

    /// Scan arbitrary text as a document. **Never panics** on any input.
    pub fn scan_document(text: &str) -> (usize, usize) {
        let path = SourcePath::new("fuzz.tex");
        let citations = scan_citations(&path, text);
        let document = extract_words(&path, text);
        (citations.len(), document.words.len())
    }
}

/// All bibliography files merged, in the order given.
#[derive(Clone, Debug)]
pub struct LoadedBibliography {
    pub bibliography: Bibliography,
    /// `parse-error` complaints from every file.
    pub complaints: Vec<Complaint>,
    pub files: usize,
}

/// Citations and word streams from every document.
#[derive(Clone, Debug)]
pub struct LoadedDocuments {
    pub citations: Citations,
    pub documents: Vec<Document>,
}

fn read_text(path: &Utf8Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path = %path, "file is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

/// Read and parse every bibliography file.
pub fn load_bibliographies(paths: &[Utf8PathBuf]) -> anyhow::Result<LoadedBibliography> {
    let mut entries = Vec::new();
    let mut complaints = Vec::new();
    for path in paths {
        let text = read_text(path)?;
        let parsed = parse_bibliography(&SourcePath::from(path.as_path()), &text);
        entries.extend(parsed.entries);
        complaints.extend(parsed.complaints);
    }
    Ok(LoadedBibliography {
        bibliography: Bibliography::new(entries),
        complaints,
        files: paths.len(),
    })
}

/// Read every document, collecting citations and words.
pub fn load_documents(paths: &[Utf8PathBuf]) -> anyhow::Result<LoadedDocuments> {
    let mut citations = Vec::new();
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let text = read_text(path)?;
        let source = SourcePath::from(path.as_path());
        citations.extend(scan_citations(&source, &text));
        documents.push(extract_words(&source, &text));
    }
    Ok(LoadedDocuments {
        citations: Citations::new(citations),
        documents,
    })
}
