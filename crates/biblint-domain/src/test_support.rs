use crate::checks::{CheckContext, LocalCopies};
use crate::error::CheckError;
use crate::model::{Bibliography, Citation, Citations, Document, Entry, Word};
use crate::policy::EffectiveConfig;
use biblint_types::{Location, SourcePath};
use std::collections::BTreeSet;

/// Entry in `refs.bib` starting at `line`; field `i` sits on `line + 1 + i`.
pub fn entry(entry_type: &str, key: &str, line: u32, fields: &[(&str, &str)]) -> Entry {
    let mut e = Entry::new(entry_type, key, SourcePath::new("refs.bib"), line);
    for (offset, (name, value)) in fields.iter().enumerate() {
        e.insert_field(name, (*value).to_string(), line + 1 + offset as u32);
    }
    e.set_end_line(line + 1 + fields.len() as u32);
    e
}

pub fn bibliography(entries: Vec<Entry>) -> Bibliography {
    Bibliography::new(entries)
}

pub fn citations(cited: &[(&str, u32)]) -> Citations {
    Citations::new(cited.iter().map(|(key, line)| Citation {
        key: (*key).to_string(),
        location: Location::new("paper.tex", *line),
    }))
}

/// One word per entry of `text`, all on line `line`.
pub fn document(text: &str, line: u32) -> Document {
    Document {
        path: SourcePath::new("paper.tex"),
        words: text
            .split_whitespace()
            .map(|w| Word {
                text: w.to_string(),
                line,
            })
            .collect(),
    }
}

pub fn context(bibliography: &Bibliography) -> CheckContext<'_> {
    CheckContext {
        bibliography,
        citations: None,
        local_copies: None,
        only_cited: false,
    }
}

pub fn config_with_checks(checks: &[&str]) -> EffectiveConfig {
    EffectiveConfig {
        selected: checks.iter().map(|c| c.to_string()).collect::<BTreeSet<_>>(),
        ..EffectiveConfig::default()
    }
}

/// Local copies exist for the listed keys only.
pub struct FakeCopies(pub Vec<&'static str>);

impl LocalCopies for FakeCopies {
    fn has_local_copy(&self, key: &str) -> Result<bool, CheckError> {
        Ok(self.0.contains(&key))
    }
}

/// Every lookup fails.
pub struct BrokenCopies;

impl LocalCopies for BrokenCopies {
    fn has_local_copy(&self, key: &str) -> Result<bool, CheckError> {
        Err(CheckError::LocalCopy {
            key: key.to_string(),
            reason: "permission denied".to_string(),
        })
    }
}
