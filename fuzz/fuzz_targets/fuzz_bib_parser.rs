//! Fuzz target for the bibliography line parser.
//!
//! Goal: The parser should **never panic** on any input.
//! Malformed input turns into `parse-error` complaints instead.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_bib_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let parsed = biblint_bib::fuzz::parse_bibliography(&text);
    for entry in &parsed.entries {
        assert!(entry.end_line() >= entry.line());
    }
});
