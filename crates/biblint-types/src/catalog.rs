//! Static check catalog.
//!
//! Every check biblint knows about is declared exactly once in [`CATALOG`]. The table is
//! plain data: selection, `list-checks` output and the engine's implementation table all
//! key off the names declared here.

use crate::ids;
use serde::Serialize;

/// What a check looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Bibliography entries.
    Bib,
    /// Document (LaTeX) text.
    Tex,
}

impl Domain {
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Bib => "bib",
            Domain::Tex => "tex",
        }
    }
}

/// How often a check runs and what unit it receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "words")]
pub enum Granularity {
    /// Once per bibliography entry.
    PerEntry,
    /// Once over the whole bibliography (and citation set).
    Collection,
    /// Once per sliding window of N consecutive document words.
    Window(usize),
}

/// Catalog record for one check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CheckDescriptor {
    pub name: &'static str,
    pub domain: Domain,
    pub granularity: Granularity,
    /// Part of the `DEFAULT` selection group.
    pub default_enabled: bool,
    pub description: &'static str,
}

const fn bib(
    name: &'static str,
    granularity: Granularity,
    default_enabled: bool,
    description: &'static str,
) -> CheckDescriptor {
    CheckDescriptor {
        name,
        domain: Domain::Bib,
        granularity,
        default_enabled,
        description,
    }
}

const fn tex(
    name: &'static str,
    words: usize,
    default_enabled: bool,
    description: &'static str,
) -> CheckDescriptor {
    CheckDescriptor {
        name,
        domain: Domain::Tex,
        granularity: Granularity::Window(words),
        default_enabled,
        description,
    }
}

pub static CATALOG: &[CheckDescriptor] = &[
    bib(
        ids::CHECK_DUPLICATE_ENTRIES_BY_NAME,
        Granularity::Collection,
        true,
        "Finds entries which share the same citation key. Only one of them can win when the \
         document is typeset, which usually leads to surprising results.",
    ),
    bib(
        ids::CHECK_MISFORMATTED_MONTH,
        Granularity::PerEntry,
        true,
        "Months are expected unquoted as three-letter lowercase English abbreviations \
         (month = jan, ..., month = dec). Quoted months like {mar} or multi-part values \
         are reported because the style cannot localize them.",
    ),
    bib(
        ids::CHECK_ILLEGAL_CHARS,
        Granularity::PerEntry,
        true,
        "Finds special characters in title or booktitle, such as typographic quotation marks \
         or dashes, which frequently break typesetting.",
    ),
    bib(
        ids::CHECK_UNQUOTED_ABBREVIATIONS,
        Granularity::PerEntry,
        true,
        "Finds mixed-case abbreviations in the title that are not protected by braces. \
         title = {How to use AES} may be typeset as \"How to use aes\".",
    ),
    bib(
        ids::CHECK_UNQUOTED_NAMES,
        Granularity::PerEntry,
        true,
        "Finds proper names from a built-in reference list in the title that are not \
         protected by braces. title = {How to use the Internet} may become \"the internet\".",
    ),
    bib(
        ids::CHECK_OVERQUOTED_TITLE,
        Granularity::PerEntry,
        true,
        "Finds titles wrapped as a whole in an extra pair of braces, e.g. \
         title = {{How To Use The Internet}}, which disables case handling for every word.",
    ),
    bib(
        ids::CHECK_ISBN,
        Granularity::PerEntry,
        true,
        "Validates the ISBN-10 or ISBN-13 checksum and the hyphenation (n-nnn-nnnnn-n or \
         nnn-n-nnn-nnnnn-n). Suggests the ISBN-13 form for valid ISBN-10 values.",
    ),
    bib(
        ids::CHECK_UNIFORM_DOI_URL,
        Granularity::PerEntry,
        true,
        "For entries with a DOI or URN, checks that the URL points to the resolver \
         (https://dx.doi.org/<doi>, https://nbn-resolving.org/<urn>). RFCs, detected by a \
         citation key of the form rfc<n>, are expected to link \
         https://tools.ietf.org/rfc/rfc<n>.txt instead.",
    ),
    bib(
        ids::CHECK_MISSING_DOI,
        Granularity::PerEntry,
        true,
        "Finds entries without any persistent identifier. Mentions when a DOI appears to be \
         hidden in another field and suggests a publisher search for IEEE, Springer, ACM and \
         Elsevier publications.",
    ),
    bib(
        ids::CHECK_RFC_DOIS,
        Granularity::PerEntry,
        true,
        "Checks that RFC entries carry the DOI format of RFC 7669 (10.17487/rfc<n>).",
    ),
    bib(
        ids::CHECK_IDENTICAL_TITLES,
        Granularity::Collection,
        true,
        "Finds different entries with exactly the same title, a likely duplicate under two \
         citation keys.",
    ),
    bib(
        ids::CHECK_PRESENT_FIELDS,
        Granularity::PerEntry,
        true,
        "Checks that the fields expected for an entry type are present, e.g. an article \
         needs a journal, and reports unknown entry types.",
    ),
    bib(
        ids::CHECK_NAME_CONSISTENCY,
        Granularity::PerEntry,
        true,
        "Checks that author first names are abbreviated consistently within one entry. \
         \"F. Bar and M. Koo\" and \"Foo Bar and Moo Koo\" pass, \"F. Bar and Moo Koo\" does not.",
    ),
    bib(
        ids::CHECK_FULL_FIRST_NAMES,
        Granularity::PerEntry,
        false,
        "Checks that author first names are spelled out in full. RFCs are exempt.",
    ),
    bib(
        ids::CHECK_LOCAL_COPIES,
        Granularity::PerEntry,
        false,
        "Checks that a local copy <key>.pdf or <key>.txt of every entry exists in the local \
         directory and links a scholar search for missing ones.",
    ),
    bib(
        ids::CHECK_UNCITED_CITATIONS,
        Granularity::Collection,
        true,
        "When documents are given, finds bibliography entries that are never cited.",
    ),
    bib(
        ids::CHECK_UNDEFINED_CITATIONS,
        Granularity::Collection,
        true,
        "When documents are given, finds citations of keys that no bibliography entry \
         defines.",
    ),
    tex(
        ids::CHECK_NUMBER_WORD_HYPHEN,
        2,
        true,
        "Finds a number followed by 'bit' that probably wants a hyphen ('32-bit \
         architecture'). May report false positives such as 'the leftmost 4 bits'.",
    ),
    tex(
        ids::CHECK_SEPARATED_WORDS,
        2,
        true,
        "Finds word pairs usually written as one word ('bit stream', 'byte code', 'run time').",
    ),
    tex(
        ids::CHECK_REPEATED_WORDS,
        20,
        false,
        "Finds word stems that repeat four or more times within twenty consecutive words.",
    ),
];

/// Look up a catalog record by exact (lowercase) name.
pub fn lookup_check(name: &str) -> Option<&'static CheckDescriptor> {
    CATALOG.iter().find(|d| d.name == name)
}

/// Catalog records for one domain, in catalog order.
pub fn checks_for_domain(domain: Domain) -> impl Iterator<Item = &'static CheckDescriptor> {
    CATALOG.iter().filter(move |d| d.domain == domain)
}

/// All check names, in catalog order.
pub fn all_check_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|d| d.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn names_are_unique() {
        let names: BTreeSet<_> = all_check_names().collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn names_are_lowercase_kebab() {
        for name in all_check_names() {
            assert!(
                name.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "check name {name} should be kebab-case"
            );
        }
    }

    #[test]
    fn tool_level_names_are_not_selectable() {
        assert!(lookup_check(ids::CHECK_PARSE_ERROR).is_none());
        assert!(lookup_check(ids::CHECK_INTERNAL_ERROR).is_none());
    }

    #[test]
    fn text_checks_run_on_windows() {
        for d in checks_for_domain(Domain::Tex) {
            assert!(matches!(d.granularity, Granularity::Window(n) if n > 0));
        }
    }

    #[test]
    fn lookup_finds_declared_checks() {
        let d = lookup_check(ids::CHECK_ISBN).expect("check-isbn is declared");
        assert_eq!(d.domain, Domain::Bib);
        assert_eq!(d.granularity, Granularity::PerEntry);
        assert!(lookup_check("no-such-check").is_none());
    }
}
