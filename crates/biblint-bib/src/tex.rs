//! Document scanning: citation commands and the word stream used by text checks.
//!
//! Works line by line so every citation and word keeps the line it was written on.
//! Nothing here understands TeX grammar; commands are recognized by pattern only.

use biblint_domain::model::{Citation, Document, Word};
use biblint_types::{Location, SourcePath};
use regex::Regex;
use std::sync::LazyLock;

static CITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:no)?[Cc]ite[tp]?\*?(?:\[[^\]]*\]){0,2}\{([^}]*)\}").expect("cite regex")
});

/// Commands whose arguments are not prose.
static DROPPED_WITH_ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\\(?:begin|end|label|ref|eqref|cref|Cref|autoref|pageref|url|input|include|selectlanguage|todo|setlength|bibliography|bibliographystyle|usepackage|documentclass)\*?(?:\[[^\]]*\])?(?:\{[^}]*\})+",
    )
    .expect("argument command regex")
});

static INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[^$]*\$").expect("inline math regex"));

static COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:[A-Za-z@]+\*?|.)").expect("command regex"));

const LEADING_PUNCTUATION: &[char] = &['[', '(', '<', '"', '`', '\''];
const TRAILING_PUNCTUATION: &[char] = &['.', ';', ':', ',', ']', ')', '>', '"', '\'', '!', '?'];

/// Text before the first unescaped `%`.
fn strip_comment(line: &str) -> &str {
    let mut escaped = false;
    for (idx, c) in line.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '%' if !escaped => return &line[..idx],
            _ => escaped = false,
        }
    }
    line
}

/// Every key cited in `text`, one [`Citation`] per key occurrence.
pub fn scan_citations(path: &SourcePath, text: &str) -> Vec<Citation> {
    let mut citations = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        for caps in CITE.captures_iter(strip_comment(raw)) {
            let Some(keys) = caps.get(1) else {
                continue;
            };
            citations.extend(
                keys.as_str()
                    .split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(|key| Citation {
                        key: key.to_string(),
                        location: Location::new(path.clone(), line),
                    }),
            );
        }
    }
    tracing::debug!(path = %path, citations = citations.len(), "scanned citations");
    citations
}

/// The prose words of `text`, with markup, math and comments removed.
pub fn extract_words(path: &SourcePath, text: &str) -> Document {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        let prose = strip_comment(raw);
        let prose = CITE.replace_all(prose, " ");
        let prose = DROPPED_WITH_ARGUMENT.replace_all(&prose, " ");
        let prose = INLINE_MATH.replace_all(&prose, " ");
        let prose = COMMAND.replace_all(&prose, " ");
        let prose = prose.replace(['~', '{', '}'], " ");

        words.extend(prose.split_whitespace().filter_map(|token| {
            let word = token
                .trim_start_matches(LEADING_PUNCTUATION)
                .trim_end_matches(TRAILING_PUNCTUATION);
            (!word.is_empty()).then(|| Word {
                text: word.to_string(),
                line,
            })
        }));
    }
    Document {
        path: path.clone(),
        words,
    }
}
