//! Fuzz target for citation scanning and word extraction.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_tex_scanner
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = biblint_bib::fuzz::scan_document(text);
    }
});
