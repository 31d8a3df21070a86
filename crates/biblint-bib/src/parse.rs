//! Line-oriented bibliography parser.
//!
//! Each line is classified once and handed to [`Parser::step`] together with the current
//! [`State`]; the step returns the next state. The parser never looks past the line at
//! hand and never revisits an entry once its boundary has been passed.

use biblint_domain::model::Entry;
use biblint_domain::scan;
use biblint_types::{Complaint, Location, SourcePath, ids};
use regex::Regex;
use std::sync::LazyLock;

static SUPPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^%\s*LINT\s+(\S+)(?:\s+(.*?))?\s*$").expect("suppression regex")
});
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@\s*([A-Za-z]+)\s*\{\s*([-A-Za-z0-9._:/]+)\s*,(.*)$").expect("header regex")
});
static SPECIAL_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^@\s*(comment|string|preamble)\b").expect("special block regex")
});
static FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([-_A-Za-z0-9]+)\s*=\s*(.*)$").expect("field regex"));

/// Entries and `parse-error` complaints read from one file.
#[derive(Clone, Debug, Default)]
pub struct ParsedFile {
    pub entries: Vec<Entry>,
    pub complaints: Vec<Complaint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    Suppression {
        check: &'a str,
        reason: Option<&'a str>,
    },
    Header {
        entry_type: &'a str,
        key: &'a str,
        rest: &'a str,
    },
    /// `@comment`, `@string`, `@preamble`.
    Skipped,
    MalformedHeader,
    FieldStart {
        name: &'a str,
        value: &'a str,
    },
    Close,
    Text,
}

impl Line<'_> {
    /// Lines that end whatever entry is open.
    fn is_boundary(&self) -> bool {
        matches!(
            self,
            Line::Header { .. } | Line::Skipped | Line::MalformedHeader
        )
    }
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('%') {
        return match SUPPRESSION.captures(trimmed) {
            Some(caps) => Line::Suppression {
                check: caps.get(1).map_or("", |m| m.as_str()),
                reason: caps.get(2).map(|m| m.as_str()).filter(|r| !r.is_empty()),
            },
            None => Line::Comment,
        };
    }
    if trimmed.starts_with('}') {
        return Line::Close;
    }
    if trimmed.starts_with('@') {
        if SPECIAL_BLOCK.is_match(trimmed) {
            return Line::Skipped;
        }
        return match HEADER.captures(trimmed) {
            Some(caps) => Line::Header {
                entry_type: caps.get(1).map_or("", |m| m.as_str()),
                key: caps.get(2).map_or("", |m| m.as_str()),
                rest: caps.get(3).map_or("", |m| m.as_str()),
            },
            None => Line::MalformedHeader,
        };
    }
    match FIELD.captures(trimmed) {
        Some(caps) => Line::FieldStart {
            name: caps.get(1).map_or("", |m| m.as_str()),
            value: caps.get(2).map_or("", |m| m.as_str()),
        },
        None => Line::Text,
    }
}

/// Net brace depth change over `text`. Escaped braces do not count.
fn brace_balance(text: &str) -> i64 {
    let mut balance = 0;
    let mut escaped = false;
    for c in text.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => balance += 1,
            '}' => balance -= 1,
            _ => {}
        }
    }
    balance
}

#[derive(Debug)]
struct OpenField {
    name: String,
    value: String,
    line: u32,
    depth: i64,
}

impl OpenField {
    fn inside_braces(&self) -> bool {
        self.depth > 0
    }
}

#[derive(Debug)]
struct OpenEntry {
    entry: Entry,
    field: Option<OpenField>,
}

#[derive(Debug)]
enum State {
    /// Between entries. `skipping` is the brace depth still open in a skipped block.
    Outside { skipping: i64 },
    InEntry(OpenEntry),
}

const OUTSIDE: State = State::Outside { skipping: 0 };

struct Parser<'p> {
    path: &'p SourcePath,
    pending: Vec<(String, Option<String>)>,
    out: ParsedFile,
}

impl Parser<'_> {
    fn complain(&mut self, line: u32, key: Option<&str>, message: String) {
        let mut complaint = Complaint::new(
            ids::CHECK_PARSE_ERROR,
            Location::new(self.path.clone(), line),
            message,
        );
        if let Some(key) = key {
            complaint = complaint.with_key(key);
        }
        self.out.complaints.push(complaint);
    }

    fn step(&mut self, state: State, line_no: u32, raw: &str) -> State {
        let line = classify(raw);
        match state {
            State::Outside { skipping } if skipping > 0 && !line.is_boundary() => {
                State::Outside {
                    skipping: skipping + brace_balance(raw),
                }
            }
            State::Outside { .. } => self.outside(line_no, raw, line),
            State::InEntry(open) => self.in_entry(open, line_no, raw, line),
        }
    }

    fn outside(&mut self, line_no: u32, raw: &str, line: Line<'_>) -> State {
        match line {
            Line::Blank | Line::Comment | Line::Text | Line::FieldStart { .. } => OUTSIDE,
            Line::Suppression { check, reason } => {
                self.pending
                    .push((check.to_ascii_lowercase(), reason.map(str::to_string)));
                OUTSIDE
            }
            Line::Skipped => {
                tracing::debug!(path = %self.path, line = line_no, "skipping non-entry block");
                State::Outside {
                    skipping: brace_balance(raw).max(0),
                }
            }
            Line::MalformedHeader => {
                self.complain(
                    line_no,
                    None,
                    "Malformed entry header, expected @type{key,".to_string(),
                );
                OUTSIDE
            }
            Line::Close => {
                self.complain(
                    line_no,
                    None,
                    "Closing brace outside of any entry".to_string(),
                );
                OUTSIDE
            }
            Line::Header {
                entry_type,
                key,
                rest,
            } => {
                let mut entry = Entry::new(entry_type, key, self.path.clone(), line_no);
                for (check, reason) in self.pending.drain(..) {
                    entry.suppress(&check, reason);
                }
                self.header_rest(OpenEntry { entry, field: None }, line_no, rest)
            }
        }
    }

    /// Whatever follows `@type{key,` on the header line.
    fn header_rest(&mut self, mut open: OpenEntry, line_no: u32, rest: &str) -> State {
        let rest = rest.trim();
        if rest.is_empty() {
            return State::InEntry(open);
        }
        if rest.starts_with('}') {
            return self.close(open, line_no);
        }
        let Some(caps) = FIELD.captures(rest) else {
            return State::InEntry(open);
        };
        let name = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str());

        // A one-line entry: `@misc{key, note = {x}}`.
        if brace_balance(value) < 0
            && let Some(stripped) = value.strip_suffix('}')
        {
            self.open_field(&mut open, line_no, name, stripped);
            return self.close(open, line_no);
        }
        self.open_field(&mut open, line_no, name, value);
        State::InEntry(open)
    }

    fn in_entry(&mut self, mut open: OpenEntry, line_no: u32, raw: &str, line: Line<'_>) -> State {
        if line.is_boundary() {
            let key = open.entry.key().to_string();
            self.complain(
                open.entry.line(),
                Some(&key),
                format!("Entry \"{key}\" is not terminated before line {line_no}"),
            );
            self.finish(open, line_no.saturating_sub(1));
            return self.outside(line_no, raw, line);
        }

        let inside_braces = open.field.as_ref().is_some_and(OpenField::inside_braces);
        match line {
            Line::Blank => State::InEntry(open),
            // An unbalanced value is reported when the field is finished.
            Line::Close => self.close(open, line_no),
            Line::FieldStart { name, value } => {
                self.open_field(&mut open, line_no, name, value);
                State::InEntry(open)
            }
            // Queued for the next header, whichever state the parser is in.
            Line::Suppression { check, reason } => {
                self.pending
                    .push((check.to_ascii_lowercase(), reason.map(str::to_string)));
                State::InEntry(open)
            }
            Line::Comment if !inside_braces => State::InEntry(open),
            _ => {
                let text = raw.trim();
                match open.field.as_mut() {
                    Some(field) => {
                        field.depth += brace_balance(text);
                        field.value.push(' ');
                        field.value.push_str(text);
                    }
                    None => {
                        tracing::debug!(
                            path = %self.path,
                            line = line_no,
                            "ignoring text before the first field"
                        );
                    }
                }
                State::InEntry(open)
            }
        }
    }

    fn open_field(&mut self, open: &mut OpenEntry, line_no: u32, name: &str, value: &str) {
        self.finish_field(open);
        let value = value.trim().to_string();
        open.field = Some(OpenField {
            name: name.to_string(),
            depth: brace_balance(&value),
            value,
            line: line_no,
        });
    }

    fn finish_field(&mut self, open: &mut OpenEntry) {
        let Some(field) = open.field.take() else {
            return;
        };
        let value = field.value.trim();
        let value = value.strip_suffix(',').unwrap_or(value).trim_end().to_string();

        if let Some(err) = scan::scan_field(&value).error() {
            self.complain(
                field.line,
                Some(open.entry.key()),
                format!("Mismatched braces in field \"{}\": {err}", field.name),
            );
        }
        if !open.entry.insert_field(&field.name, value, field.line) {
            tracing::debug!(
                path = %self.path,
                key = open.entry.key(),
                field = %field.name,
                line = field.line,
                "duplicate field dropped, first occurrence wins"
            );
        }
    }

    fn finish(&mut self, mut open: OpenEntry, end_line: u32) {
        self.finish_field(&mut open);
        open.entry.set_end_line(end_line);
        self.out.entries.push(open.entry);
    }

    fn close(&mut self, open: OpenEntry, line_no: u32) -> State {
        self.finish(open, line_no);
        OUTSIDE
    }
}

/// Parse one bibliography file. Problems become `parse-error` complaints; this never fails.
pub fn parse_bibliography(path: &SourcePath, text: &str) -> ParsedFile {
    let mut parser = Parser {
        path,
        pending: Vec::new(),
        out: ParsedFile::default(),
    };

    let mut state = OUTSIDE;
    let mut last_line = 0;
    for (idx, raw) in text.lines().enumerate() {
        let line_no = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        last_line = line_no;
        state = parser.step(state, line_no, raw);
    }

    if let State::InEntry(open) = state {
        let key = open.entry.key().to_string();
        parser.complain(
            open.entry.line(),
            Some(&key),
            format!("Entry \"{key}\" is not terminated at end of file"),
        );
        parser.finish(open, last_line);
    }
    if !parser.pending.is_empty() {
        tracing::debug!(
            path = %path,
            dropped = parser.pending.len(),
            "suppressions at end of file have no entry to apply to"
        );
    }

    tracing::debug!(
        path = %path,
        entries = parser.out.entries.len(),
        errors = parser.out.complaints.len(),
        "parsed bibliography"
    );
    parser.out
}
