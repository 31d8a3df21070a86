//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - ISBN checksum sensitivity and ISBN-10 conversion
//! - Brace scanning on arbitrary input
//! - Complaint ordering determinism

use crate::engine::{LintInput, evaluate};
use crate::isbn;
use crate::scan;
use crate::test_support::{bibliography, config_with_checks, entry};
use biblint_types::{Complaint, Location, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Valid ISBN-13 digits: twelve random digits plus the computed check digit.
fn arb_isbn13_digits() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..10, 12).prop_map(|mut digits| {
        let weighted: u32 = digits
            .iter()
            .zip([1, 3].iter().cycle())
            .map(|(d, w)| d * w)
            .sum();
        digits.push((10 - weighted % 10) % 10);
        digits
    })
}

/// Valid ISBN-10 digits (check digit may be 10, written as X).
fn arb_isbn10_digits() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..10, 9).prop_map(|mut digits| {
        let weighted: u32 = digits.iter().zip((2..=10).rev()).map(|(d, w)| d * w).sum();
        digits.push((11 - weighted % 11) % 11);
        digits
    })
}

fn render_digits(digits: &[u32]) -> String {
    digits
        .iter()
        .map(|d| if *d == 10 { 'X' } else { char::from_digit(*d, 10).unwrap_or('?') })
        .collect()
}

fn hyphenate(digits: &str, groups: &[usize]) -> String {
    let mut out = Vec::new();
    let mut rest = digits;
    for len in groups {
        let (head, tail) = rest.split_at(*len);
        out.push(head);
        rest = tail;
    }
    out.join("-")
}

fn arb_complaint() -> impl Strategy<Value = Complaint> {
    (
        prop_oneof![Just("a.bib"), Just("b.bib"), Just("paper.tex")],
        1u32..200,
        prop_oneof![
            Just(ids::CHECK_ISBN),
            Just(ids::CHECK_MISFORMATTED_MONTH),
            Just(ids::CHECK_PARSE_ERROR)
        ],
        "[a-z ]{0,12}",
    )
        .prop_map(|(path, line, check, message)| {
            Complaint::new(check, Location::new(path, line), message)
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn valid_isbn13_passes_and_any_single_digit_flip_fails(
        digits in arb_isbn13_digits(),
        position in 0usize..13,
        delta in 1u32..10,
    ) {
        let valid = render_digits(&digits);
        prop_assert!(isbn::checksum_valid(&valid));

        let mut flipped = digits.clone();
        flipped[position] = (flipped[position] + delta) % 10;
        prop_assert!(!isbn::checksum_valid(&render_digits(&flipped)));
    }

    #[test]
    fn isbn10_conversion_yields_valid_isbn13(digits in arb_isbn10_digits()) {
        let compact = render_digits(&digits);
        let hyphenated = hyphenate(&compact, &[1, 3, 5, 1]);
        prop_assert!(isbn::validate(&hyphenated).is_empty());

        let converted = isbn::to_isbn13(&hyphenated).expect("valid ISBN-10 converts");
        prop_assert!(isbn::checksum_valid(&converted));
        prop_assert!(isbn::validate(&converted).is_empty());
        prop_assert!(converted.starts_with("978-"));
    }

    #[test]
    fn scanner_never_leaks_structural_braces(value in "[a-zA-Z{} \\\\]{0,40}") {
        let scanned = scan::scan_content(&value);
        for token in scanned.tokens() {
            let text = token.text();
            // Braces may only survive as the escaped forms.
            let mut prev = None;
            for c in text.chars() {
                if c == '{' || c == '}' {
                    prop_assert_eq!(prev, Some('\\'));
                }
                prev = Some(c);
            }
            prop_assert!(!text.is_empty());
        }
    }

    #[test]
    fn complaint_order_is_independent_of_input_order(
        complaints in prop::collection::vec(arb_complaint(), 0..30),
    ) {
        let mut forward = complaints.clone();
        forward.sort();
        let mut backward: Vec<_> = complaints.into_iter().rev().collect();
        backward.sort();
        prop_assert_eq!(&forward, &backward);

        for pair in forward.windows(2) {
            let a = (pair[0].path(), pair[0].line());
            let b = (pair[1].path(), pair[1].line());
            prop_assert!(a <= b);
        }
    }

    #[test]
    fn engine_output_is_sorted(months in prop::collection::vec("(jan|\\{mar\\}|foo)", 1..10)) {
        let entries = months
            .iter()
            .enumerate()
            .map(|(i, m)| entry("misc", &format!("k{i}"), 1 + 3 * i as u32, &[("month", m.as_str())]))
            .collect();
        let bib = bibliography(entries);
        let cfg = config_with_checks(&[ids::CHECK_MISFORMATTED_MONTH, ids::CHECK_PRESENT_FIELDS]);
        let report = evaluate(&LintInput::new(&bib), &cfg);

        let mut sorted = report.complaints.clone();
        sorted.sort();
        prop_assert_eq!(report.complaints, sorted);
    }
}
