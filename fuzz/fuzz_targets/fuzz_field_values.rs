//! Fuzz target for field-value helpers: the brace scanner and the ISBN validator.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_field_values
//! ```

#![no_main]

use biblint_domain::{isbn, scan};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let scanned = scan::scan_field(text);
        let _ = scanned.plain_text();
        let _ = scanned.is_overquoted();

        let _ = isbn::validate(text);
        if let Ok(converted) = isbn::to_isbn13(text) {
            assert_eq!(isbn::kind_of(&converted), Some(isbn::IsbnKind::Isbn13));
        }
    }
});
