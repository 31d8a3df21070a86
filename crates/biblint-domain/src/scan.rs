//! Brace/quote scanner for field values.
//!
//! BibTeX protects text from case changes by wrapping it in braces. The scanner tracks
//! the nesting depth of every character of a value so that checks can ask whether a
//! word is protected ("quoted") or not.
//!
//! Depth is measured inside the field delimiter: for `title = {How to use {AES}}` the
//! outer pair only delimits the value, so `How` sits at depth 0 and `AES` at depth 1.

use std::fmt;

/// How a raw field value is delimited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    /// `{...}`
    Braces,
    /// `"..."`
    Quotes,
    /// No delimiter: a number, a macro name like `jan`, or a concatenation.
    Bare,
}

/// A brace mismatch found while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BraceError {
    /// A `}` with no matching `{`; `column` is the 1-based character column in the
    /// scanned content. Everything from this point on was dropped.
    PrematureClose { column: usize },
    /// The content ended while `depth` pairs were still open.
    Unclosed { depth: u32 },
}

impl fmt::Display for BraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BraceError::PrematureClose { column } => write!(
                f,
                "closing brace at column {column} has no opening brace, value truncated"
            ),
            BraceError::Unclosed { depth } => {
                write!(f, "{depth} opening brace(s) never closed")
            }
        }
    }
}

/// A whitespace-delimited token with the depth of every character.
///
/// Structural braces are not part of the token text; escaped braces (`\{`, `\}`) are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    chars: Vec<char>,
    depths: Vec<u32>,
}

impl Token {
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Minimum depth over the whole token.
    pub fn depth(&self) -> u32 {
        self.depths.iter().copied().min().unwrap_or(0)
    }

    /// Minimum depth over the characters `start..end` (character indices).
    pub fn span_depth(&self, start: usize, end: usize) -> u32 {
        let end = end.min(self.depths.len());
        self.depths
            .get(start..end)
            .and_then(|d| d.iter().copied().min())
            .unwrap_or(0)
    }

    /// Minimum depth over a byte range of [`Token::text`], as returned by regex matches.
    pub fn byte_span_depth(&self, start: usize, end: usize) -> u32 {
        let mut offset = 0;
        let (mut first, mut last) = (None, 0);
        for (idx, c) in self.chars.iter().enumerate() {
            if offset >= start && offset < end {
                first.get_or_insert(idx);
                last = idx + 1;
            }
            offset += c.len_utf8();
        }
        match first {
            Some(first) => self.span_depth(first, last),
            None => 0,
        }
    }
}

/// The result of scanning one field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannedValue {
    delimiter: Delimiter,
    tokens: Vec<Token>,
    error: Option<BraceError>,
    outer_group: bool,
}

impl ScannedValue {
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn error(&self) -> Option<BraceError> {
        self.error
    }

    /// Token texts joined by single spaces, with structural braces removed.
    pub fn plain_text(&self) -> String {
        self.tokens
            .iter()
            .map(Token::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The whole content is one brace pair holding more than one word.
    pub fn is_overquoted(&self) -> bool {
        self.outer_group && self.tokens.len() > 1
    }
}

/// Strip the field delimiter from a raw value and scan the content.
pub fn scan_field(raw: &str) -> ScannedValue {
    let trimmed = raw.trim();
    let (delimiter, content) = split_delimiter(trimmed);
    let mut scanned = scan_content(content);
    scanned.delimiter = delimiter;
    scanned
}

/// Scan content that has no field delimiter around it.
pub fn scan_content(content: &str) -> ScannedValue {
    let chars: Vec<char> = content.chars().collect();
    let last_visible = chars.iter().rposition(|c| !c.is_whitespace());
    let first_visible = chars.iter().position(|c| !c.is_whitespace());

    let mut tokens = Vec::new();
    let mut current = Token {
        chars: Vec::new(),
        depths: Vec::new(),
    };
    let mut depth: u32 = 0;
    let mut error = None;
    let mut outer_group = false;
    let mut first_group_closed = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' if matches!(chars.get(i + 1), Some('{') | Some('}')) => {
                current.chars.extend([c, chars[i + 1]]);
                current.depths.extend([depth, depth]);
                i += 2;
                continue;
            }
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    error = Some(BraceError::PrematureClose { column: i + 1 });
                    break;
                }
                depth -= 1;
                if depth == 0 && !first_group_closed {
                    first_group_closed = true;
                    outer_group = first_visible.is_some_and(|f| chars[f] == '{')
                        && last_visible == Some(i);
                }
            }
            c if c.is_whitespace() => flush(&mut tokens, &mut current),
            c => {
                current.chars.push(c);
                current.depths.push(depth);
            }
        }
        i += 1;
    }
    flush(&mut tokens, &mut current);

    if error.is_none() && depth > 0 {
        error = Some(BraceError::Unclosed { depth });
    }

    ScannedValue {
        delimiter: Delimiter::Bare,
        tokens,
        error,
        outer_group: outer_group && error.is_none(),
    }
}

fn flush(tokens: &mut Vec<Token>, current: &mut Token) {
    if !current.chars.is_empty() {
        tokens.push(std::mem::replace(
            current,
            Token {
                chars: Vec::new(),
                depths: Vec::new(),
            },
        ));
    }
}

fn split_delimiter(value: &str) -> (Delimiter, &str) {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return (Delimiter::Quotes, &value[1..value.len() - 1]);
    }
    if value.starts_with('{') && matching_close(value) == Some(value.len() - 1) {
        return (Delimiter::Braces, &value[1..value.len() - 1]);
    }
    (Delimiter::Bare, value)
}

/// Byte offset of the `}` closing the `{` at offset 0.
fn matching_close(value: &str) -> Option<usize> {
    let mut depth = 0u32;
    let mut escaped = false;
    for (idx, c) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// A reference word found unprotected in a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Underquoted {
    pub word: String,
    pub token: String,
}

/// Find reference words that occur at depth 0.
///
/// Matching is case-insensitive and bounded by non-alphanumeric characters. Only the
/// characters of the match decide: `{AES}-based` protects `AES` even though the
/// `-based` part of the token sits at depth 0. Each reference word is reported once.
pub fn find_underquoted(value: &ScannedValue, reference: &[&str]) -> Vec<Underquoted> {
    let mut out = Vec::new();
    for word in reference {
        let needle: Vec<char> = word.chars().collect();
        if needle.is_empty() {
            continue;
        }
        let hit = value.tokens.iter().find(|token| {
            occurrences(&token.chars, &needle)
                .any(|start| token.span_depth(start, start + needle.len()) == 0)
        });
        if let Some(token) = hit {
            out.push(Underquoted {
                word: (*word).to_string(),
                token: token.text(),
            });
        }
    }
    out
}

fn occurrences<'a>(haystack: &'a [char], needle: &'a [char]) -> impl Iterator<Item = usize> + 'a {
    (0..=haystack.len().saturating_sub(needle.len()))
        .filter(move |&start| haystack.len() >= needle.len() + start)
        .filter(move |&start| {
            haystack[start..start + needle.len()]
                .iter()
                .zip(needle)
                .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
        })
        .filter(move |&start| {
            let before = start.checked_sub(1).map(|i| haystack[i]);
            let after = haystack.get(start + needle.len()).copied();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
}
