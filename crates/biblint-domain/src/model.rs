use crate::scan::{self, ScannedValue};
use biblint_types::{Location, SourcePath};
use std::collections::BTreeMap;

/// A field value as written, plus the line the field started on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub line: u32,
}

/// One bibliography entry.
///
/// Field names are stored lowercased. The first occurrence of a field wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    entry_type: String,
    key: String,
    path: SourcePath,
    line: u32,
    end_line: u32,
    fields: BTreeMap<String, Field>,
    suppressions: BTreeMap<String, Option<String>>,
}

impl Entry {
    pub fn new(entry_type: &str, key: &str, path: SourcePath, line: u32) -> Self {
        Self {
            entry_type: entry_type.to_ascii_lowercase(),
            key: key.to_string(),
            path,
            line,
            end_line: line,
            fields: BTreeMap::new(),
            suppressions: BTreeMap::new(),
        }
    }

    /// Add a field. Returns `false` (and keeps the existing value) for duplicates.
    pub fn insert_field(&mut self, name: &str, value: String, line: u32) -> bool {
        let name = name.to_ascii_lowercase();
        if self.fields.contains_key(&name) {
            return false;
        }
        self.fields.insert(name, Field { value, line });
        true
    }

    pub fn suppress(&mut self, check: &str, reason: Option<String>) {
        self.suppressions.insert(check.to_ascii_lowercase(), reason);
    }

    pub fn set_end_line(&mut self, line: u32) {
        self.end_line = line.max(self.line);
    }

    /// Lowercased entry type (`article`, `inproceedings`, ...).
    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> &SourcePath {
        &self.path
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    pub fn fields(&self) -> &BTreeMap<String, Field> {
        &self.fields
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Raw field value, delimiters included.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|f| f.value.as_str())
    }

    pub fn scanned(&self, name: &str) -> Option<ScannedValue> {
        self.field(name).map(scan::scan_field)
    }

    /// Field content with delimiters and structural braces removed.
    pub fn text(&self, name: &str) -> Option<String> {
        self.scanned(name).map(|v| v.plain_text())
    }

    pub fn location(&self) -> Location {
        Location::new(self.path.clone(), self.line)
    }

    /// Where a field starts, falling back to the entry header.
    pub fn location_of(&self, field: &str) -> Location {
        let line = self.fields.get(field).map_or(self.line, |f| f.line);
        Location::new(self.path.clone(), line)
    }

    pub fn suppressions(&self) -> &BTreeMap<String, Option<String>> {
        &self.suppressions
    }

    pub fn is_suppressed(&self, check: &str) -> bool {
        self.suppressions.contains_key(check)
    }

    fn spans(&self, location: &Location) -> bool {
        self.path == location.path && (self.line..=self.end_line).contains(&location.line)
    }
}

/// All entries of a lint run, in file and insertion order.
#[derive(Clone, Debug, Default)]
pub struct Bibliography {
    entries: Vec<Entry>,
    by_key: BTreeMap<String, Vec<usize>>,
}

impl Bibliography {
    pub fn new(entries: Vec<Entry>) -> Self {
        let mut by_key: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            by_key.entry(entry.key.clone()).or_default().push(idx);
        }
        Self { entries, by_key }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// First entry declared with `key`.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.by_key
            .get(key)
            .and_then(|idx| idx.first())
            .map(|&i| &self.entries[i])
    }

    /// Every entry declared with `key`, in declaration order.
    pub fn all_with_key<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.by_key
            .get(key)
            .into_iter()
            .flatten()
            .map(|&i| &self.entries[i])
    }

    /// Entry whose source span contains `location`.
    pub fn entry_at(&self, location: &Location) -> Option<&Entry> {
        self.entries.iter().find(|e| e.spans(location))
    }
}

/// A citation found in a document.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Citation {
    pub key: String,
    pub location: Location,
}

/// Citation key -> every place it is cited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Citations {
    by_key: BTreeMap<String, Vec<Location>>,
}

impl Citations {
    pub fn new(citations: impl IntoIterator<Item = Citation>) -> Self {
        let mut by_key: BTreeMap<String, Vec<Location>> = BTreeMap::new();
        for c in citations {
            by_key.entry(c.key).or_default().push(c.location);
        }
        Self { by_key }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn locations(&self, key: &str) -> &[Location] {
        self.by_key.get(key).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Location])> {
        self.by_key
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Number of citations, counting every place a key is cited.
    pub fn occurrences(&self) -> usize {
        self.by_key.values().map(Vec::len).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub line: u32,
}

/// The word stream of one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub path: SourcePath,
    pub words: Vec<Word>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, line: u32, end: u32) -> Entry {
        let mut e = Entry::new("Article", key, SourcePath::new("refs.bib"), line);
        e.set_end_line(end);
        e
    }

    #[test]
    fn first_field_wins() {
        let mut e = entry("a", 1, 4);
        assert!(e.insert_field("Title", "{One}".to_string(), 2));
        assert!(!e.insert_field("title", "{Two}".to_string(), 3));
        assert_eq!(e.field("title"), Some("{One}"));
        assert_eq!(e.location_of("title").line, 2);
        assert_eq!(e.location_of("missing").line, 1);
        assert_eq!(e.entry_type(), "article");
    }

    #[test]
    fn text_strips_structural_braces() {
        let mut e = entry("a", 1, 3);
        e.insert_field("title", "{How to use {AES}}".to_string(), 2);
        assert_eq!(e.text("title").as_deref(), Some("How to use AES"));
    }

    #[test]
    fn bibliography_indexes_duplicates() {
        let bib = Bibliography::new(vec![entry("a", 1, 3), entry("b", 5, 7), entry("a", 9, 11)]);
        assert_eq!(bib.len(), 3);
        assert_eq!(bib.get("a").map(Entry::line), Some(1));
        assert_eq!(bib.all_with_key("a").count(), 2);
        assert_eq!(bib.all_with_key("zzz").count(), 0);
        assert!(!bib.contains_key("c"));
    }

    #[test]
    fn entry_at_uses_file_and_line_span() {
        let bib = Bibliography::new(vec![entry("a", 1, 3), entry("b", 5, 7)]);
        assert_eq!(
            bib.entry_at(&Location::new("refs.bib", 6)).map(Entry::key),
            Some("b")
        );
        assert!(bib.entry_at(&Location::new("refs.bib", 4)).is_none());
        assert!(bib.entry_at(&Location::new("other.bib", 2)).is_none());
    }

    #[test]
    fn citations_group_by_key() {
        let cites = Citations::new([
            Citation {
                key: "a".to_string(),
                location: Location::new("paper.tex", 3),
            },
            Citation {
                key: "a".to_string(),
                location: Location::new("paper.tex", 9),
            },
            Citation {
                key: "b".to_string(),
                location: Location::new("paper.tex", 4),
            },
        ]);
        assert_eq!(cites.len(), 2);
        assert_eq!(cites.locations("a").len(), 2);
        assert!(cites.locations("zzz").is_empty());
    }
}
