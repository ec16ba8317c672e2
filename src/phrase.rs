//! Phrase extraction: minimal composition clauses out of longer text.
//!
//! Two shapes of input reach this module. A short labeled line
//! ("Shell: 100% Cotton") is a self-contained spec line and is kept whole.
//! Anything else goes through pattern matching that cuts the smallest
//! substring asserting a percentage of a named fiber, so a marketing
//! sentence contributes "55% linen" rather than the whole sentence.

use crate::patterns;
use crate::text;

/// Upper length bound for the labeled-line shortcut.
pub const LABELED_LINE_MAX: usize = 180;

/// True iff the line is an already-clean labeled composition line:
/// short, contains a colon, carries percent and fiber, and is not noise.
/// Such lines are kept whole rather than fragmented.
#[must_use]
pub fn is_labeled_line(line: &str) -> bool {
    line.chars().count() <= LABELED_LINE_MAX
        && line.contains(':')
        && text::has_percent(line)
        && text::has_fiber(line)
        && !text::is_excluded(line)
}

/// Finds all non-overlapping composition clauses in `raw`, normalized,
/// deduplicated by lowercase form, capped at `cap`.
#[must_use]
pub fn extract_phrases(raw: &str, cap: usize) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut phrases: Vec<String> = Vec::new();

    for found in patterns::COMPOSITION_PHRASE.find_iter(raw) {
        if phrases.len() >= cap {
            break;
        }
        let phrase = text::normalize(found.as_str());
        let key = phrase.to_lowercase();
        if phrase.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        phrases.push(phrase);
    }

    phrases
}
