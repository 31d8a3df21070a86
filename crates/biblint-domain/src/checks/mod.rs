//! Check implementations and the static table binding them to catalog names.

use crate::error::CheckError;
use crate::model::{Bibliography, Citations, Document, Entry, Word};
use biblint_types::{Complaint, ids};

mod characters;
mod citations;
mod doi;
mod duplicates;
mod fields;
mod isbn;
mod local_copies;
mod month;
mod names;
mod quoting;
mod text;
mod titles;
mod utils;


/// Existence probe for local copies of cited works.
pub trait LocalCopies {
    fn has_local_copy(&self, key: &str) -> Result<bool, CheckError>;
}

/// What a check sees besides the unit it runs on.
pub struct CheckContext<'a> {
    pub bibliography: &'a Bibliography,
    pub citations: Option<&'a Citations>,
    pub local_copies: Option<&'a dyn LocalCopies>,
    pub only_cited: bool,
}

impl<'a> CheckContext<'a> {
    /// Entries in scope: all of them, or only the cited ones.
    pub fn entries(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.bibliography
            .entries()
            .iter()
            .filter(move |e| self.in_scope(e))
    }

    pub fn in_scope(&self, entry: &Entry) -> bool {
        match (self.only_cited, self.citations) {
            (true, Some(citations)) => citations.contains(entry.key()),
            _ => true,
        }
    }
}

pub type EntryCheck =
    fn(&Entry, &CheckContext<'_>, &mut Vec<Complaint>) -> Result<(), CheckError>;
pub type CollectionCheck = fn(&CheckContext<'_>, &mut Vec<Complaint>) -> Result<(), CheckError>;

/// A check over sliding word windows. One instance is created per document, so
/// implementations may keep state between windows.
pub trait WindowCheck {
    fn check_window(
        &mut self,
        document: &Document,
        window: &[Word],
        out: &mut Vec<Complaint>,
    ) -> Result<(), CheckError>;
}

pub enum CheckImpl {
    PerEntry(EntryCheck),
    Collection(CollectionCheck),
    Window(fn() -> Box<dyn WindowCheck>),
}

pub struct RegisteredCheck {
    pub name: &'static str,
    pub implementation: CheckImpl,
}

const fn per_entry(name: &'static str, f: EntryCheck) -> RegisteredCheck {
    RegisteredCheck {
        name,
        implementation: CheckImpl::PerEntry(f),
    }
}

const fn collection(name: &'static str, f: CollectionCheck) -> RegisteredCheck {
    RegisteredCheck {
        name,
        implementation: CheckImpl::Collection(f),
    }
}

const fn window(name: &'static str, f: fn() -> Box<dyn WindowCheck>) -> RegisteredCheck {
    RegisteredCheck {
        name,
        implementation: CheckImpl::Window(f),
    }
}

static REGISTRY: &[RegisteredCheck] = &[
    collection(ids::CHECK_DUPLICATE_ENTRIES_BY_NAME, duplicates::run),
    per_entry(ids::CHECK_MISFORMATTED_MONTH, month::run),
    per_entry(ids::CHECK_ILLEGAL_CHARS, characters::run),
    per_entry(ids::CHECK_UNQUOTED_ABBREVIATIONS, quoting::abbreviations),
    per_entry(ids::CHECK_UNQUOTED_NAMES, quoting::names),
    per_entry(ids::CHECK_OVERQUOTED_TITLE, quoting::overquoted),
    per_entry(ids::CHECK_ISBN, isbn::run),
    per_entry(ids::CHECK_UNIFORM_DOI_URL, doi::uniform_url),
    per_entry(ids::CHECK_MISSING_DOI, doi::missing),
    per_entry(ids::CHECK_RFC_DOIS, doi::rfc),
    collection(ids::CHECK_IDENTICAL_TITLES, titles::run),
    per_entry(ids::CHECK_PRESENT_FIELDS, fields::run),
    per_entry(ids::CHECK_NAME_CONSISTENCY, names::consistency),
    per_entry(ids::CHECK_FULL_FIRST_NAMES, names::full_first_names),
    per_entry(ids::CHECK_LOCAL_COPIES, local_copies::run),
    collection(ids::CHECK_UNCITED_CITATIONS, citations::uncited),
    collection(ids::CHECK_UNDEFINED_CITATIONS, citations::undefined),
    window(ids::CHECK_NUMBER_WORD_HYPHEN, text::number_word_hyphen),
    window(ids::CHECK_SEPARATED_WORDS, text::separated_words),
    window(ids::CHECK_REPEATED_WORDS, text::repeated_words),
];

/// Implementation bound to a catalog name.
pub fn implementation(name: &str) -> Option<&'static CheckImpl> {
    REGISTRY
        .iter()
        .find(|c| c.name == name)
        .map(|c| &c.implementation)
}

pub fn registry() -> &'static [RegisteredCheck] {
    REGISTRY
}
