//! Word-window checks over document text.

use super::WindowCheck;
use crate::error::CheckError;
use crate::model::{Document, Word};
use biblint_types::{Complaint, Location, ids};
use std::collections::BTreeMap;

fn word_complaint(check: &str, document: &Document, word: &Word, message: String) -> Complaint {
    Complaint::new(check, Location::new(document.path.clone(), word.line), message)
}

struct NumberWordHyphen;

impl WindowCheck for NumberWordHyphen {
    fn check_window(
        &mut self,
        document: &Document,
        window: &[Word],
        out: &mut Vec<Complaint>,
    ) -> Result<(), CheckError> {
        let [number, unit] = window else {
            return Ok(());
        };
        let is_number = !number.text.is_empty() && number.text.chars().all(|c| c.is_ascii_digit());
        if is_number && unit.text == "bit" {
            out.push(word_complaint(
                ids::CHECK_NUMBER_WORD_HYPHEN,
                document,
                unit,
                format!(
                    "\"{} {}\" should probably be hyphenated: {}-{}",
                    number.text, unit.text, number.text, unit.text
                ),
            ));
        }
        Ok(())
    }
}

pub fn number_word_hyphen() -> Box<dyn WindowCheck> {
    Box::new(NumberWordHyphen)
}

const SEPARATED_PAIRS: &[(&str, &str)] = &[
    ("bit", "stream"),
    ("byte", "code"),
    ("run", "time"),
    ("key", "less"),
    ("hard", "code"),
    ("hard", "coded"),
    ("work", "flow"),
];

struct SeparatedWords;

impl WindowCheck for SeparatedWords {
    fn check_window(
        &mut self,
        document: &Document,
        window: &[Word],
        out: &mut Vec<Complaint>,
    ) -> Result<(), CheckError> {
        let [first, second] = window else {
            return Ok(());
        };
        let pair = (first.text.to_lowercase(), second.text.to_lowercase());
        if SEPARATED_PAIRS
            .iter()
            .any(|(a, b)| pair.0 == *a && pair.1 == *b)
        {
            out.push(word_complaint(
                ids::CHECK_SEPARATED_WORDS,
                document,
                first,
                format!(
                    "\"{} {}\" is usually written as one word: {}{}",
                    first.text, second.text, first.text, second.text
                ),
            ));
        }
        Ok(())
    }
}

pub fn separated_words() -> Box<dyn WindowCheck> {
    Box::new(SeparatedWords)
}

const REPEAT_THRESHOLD: usize = 4;
const REPEAT_WHITELIST: [&str; 3] = ["the", "are", "were"];

/// Crude stem: lowercase, then strip a plural `s` and an `er` suffix.
fn stem(word: &str) -> String {
    let mut stem = word.to_lowercase();
    if let Some(s) = stem.strip_suffix('s') {
        stem = s.to_string();
    }
    if let Some(s) = stem.strip_suffix("er") {
        stem = s.to_string();
    }
    stem
}

/// Reports a stem once, then stays quiet about it for `hold_off` repeated sightings.
struct RepeatedWords {
    hold_off: usize,
    quiet: BTreeMap<String, usize>,
}

impl WindowCheck for RepeatedWords {
    fn check_window(
        &mut self,
        document: &Document,
        window: &[Word],
        out: &mut Vec<Complaint>,
    ) -> Result<(), CheckError> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for word in window {
            let lower = word.text.to_lowercase();
            if lower.chars().count() < 3 || REPEAT_WHITELIST.contains(&lower.as_str()) {
                continue;
            }
            *counts.entry(stem(&lower)).or_default() += 1;
        }

        let mut frequent: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|(_, n)| *n >= REPEAT_THRESHOLD)
            .collect();
        frequent.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        for (stem, count) in frequent {
            match self.quiet.get_mut(&stem) {
                Some(remaining) if *remaining > 0 => *remaining -= 1,
                _ => {
                    let Some(first) = window.first() else {
                        continue;
                    };
                    out.push(word_complaint(
                        ids::CHECK_REPEATED_WORDS,
                        document,
                        first,
                        format!(
                            "Word stem \"{stem}\" occurs {count} times within {} words",
                            window.len()
                        ),
                    ));
                    self.quiet.insert(stem, self.hold_off);
                }
            }
        }
        Ok(())
    }
}

pub fn repeated_words() -> Box<dyn WindowCheck> {
    Box::new(RepeatedWords {
        hold_off: 20,
        quiet: BTreeMap::new(),
    })
}
