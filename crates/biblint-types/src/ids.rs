//! Stable identifiers for checks.
//!
//! Check names are kebab-case and double as the token users write in selection
//! expressions and `% LINT <name>` suppression directives.

// Bibliography checks
pub const CHECK_DUPLICATE_ENTRIES_BY_NAME: &str = "duplicate-entries-by-name";
pub const CHECK_MISFORMATTED_MONTH: &str = "misformatted-month";
pub const CHECK_ILLEGAL_CHARS: &str = "entries-with-illegal-chars";
pub const CHECK_UNQUOTED_ABBREVIATIONS: &str = "entries-with-unquoted-abbreviations";
pub const CHECK_UNQUOTED_NAMES: &str = "entries-with-unquoted-names";
pub const CHECK_OVERQUOTED_TITLE: &str = "entries-with-overquoted-title";
pub const CHECK_ISBN: &str = "check-isbn";
pub const CHECK_UNIFORM_DOI_URL: &str = "check-uniform-doi-url";
pub const CHECK_MISSING_DOI: &str = "check-missing-doi";
pub const CHECK_RFC_DOIS: &str = "check-rfc-dois";
pub const CHECK_IDENTICAL_TITLES: &str = "check-identical-titles";
pub const CHECK_PRESENT_FIELDS: &str = "check-present-fields";
pub const CHECK_NAME_CONSISTENCY: &str = "check-name-consistency";
pub const CHECK_FULL_FIRST_NAMES: &str = "check-full-first-names";
pub const CHECK_LOCAL_COPIES: &str = "check-local-copies";
pub const CHECK_UNCITED_CITATIONS: &str = "uncited-citations";
pub const CHECK_UNDEFINED_CITATIONS: &str = "undefined-citations";

// Document text checks
pub const CHECK_NUMBER_WORD_HYPHEN: &str = "number-word-hyphen";
pub const CHECK_SEPARATED_WORDS: &str = "separated-words";
pub const CHECK_REPEATED_WORDS: &str = "repeated-words";

// Tool-level, always emitted and never selectable
pub const CHECK_PARSE_ERROR: &str = "parse-error";
pub const CHECK_INTERNAL_ERROR: &str = "internal-check-error";
