//! Candidate post-processing: dedup, subset suppression, and collapsing a
//! hit pool into a single display string.
//!
//! A joined raw string comes back apart on the same delimiter rules it was
//! built with, loses fragments that a longer surviving entry subsumes, and
//! is either a single clear winner or a join of co-equal composition facts.

use crate::hits::JOIN_DELIMITER;
use crate::patterns;
use crate::text;

/// A shorter entry is dropped only when the longer one exceeds it by at
/// least this many characters.
pub const SUBSET_SLACK: usize = 6;

/// Lead required for the top-ranked entry to stand alone.
pub const STANDALONE_MARGIN: i32 = 2;

/// Entries longer than this lose label-density points.
pub const LONG_ENTRY: usize = 220;

/// Collapses a joined raw string into one display string, or nothing.
/// `max_joined` bounds how many co-equal entries are joined back together.
#[must_use]
pub fn collapse(joined: &str, max_joined: usize) -> Option<String> {
    let mut entries: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for part in patterns::ENTRY_SPLIT.split(joined) {
        let entry = text::normalize(part);
        let key = entry.to_lowercase();
        if entry.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        entries.push(entry);
    }

    let survivors: Vec<&String> = entries
        .iter()
        .filter(|entry| !entries.iter().any(|other| subsumes(other, entry)))
        .collect();

    match survivors.len() {
        0 => None,
        1 => Some(survivors[0].clone()),
        _ => Some(rank_and_join(&survivors, max_joined)),
    }
}

/// True iff `longer` makes `entry` redundant: it contains `entry` as a
/// literal substring, or contains every whitespace token of it, and is at
/// least [`SUBSET_SLACK`] characters longer. Prefers the fuller
/// composition statement over a fragment of it.
fn subsumes(longer: &str, entry: &str) -> bool {
    if longer.chars().count() < entry.chars().count() + SUBSET_SLACK {
        return false;
    }
    let longer_lower = longer.to_lowercase();
    let entry_lower = entry.to_lowercase();
    if longer_lower.contains(&entry_lower) {
        return true;
    }
    let tokens: Vec<&str> = longer_lower.split_whitespace().collect();
    entry_lower
        .split_whitespace()
        .all(|token| tokens.contains(&token))
}

/// Label-density score: how much the entry reads like a composition
/// label rather than prose.
fn label_score(entry: &str) -> i32 {
    let mut score = 0;
    if text::has_percent(entry) {
        score += 3;
    }
    if text::has_fiber(entry) {
        score += 2;
    }
    if entry.contains(':') {
        score += 2;
    }
    if entry.chars().count() > LONG_ENTRY {
        score -= 2;
    }
    if patterns::MARKETING_ADJECTIVE.is_match(entry) {
        score -= 2;
    }
    score
}

fn rank_and_join(survivors: &[&String], max_joined: usize) -> String {
    let mut ranked: Vec<(i32, &str)> = survivors
        .iter()
        .map(|entry| (label_score(entry), entry.as_str()))
        .collect();
    // Ties go to the longer display string.
    ranked.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.chars().count().cmp(&a.1.chars().count()))
    });

    if ranked[0].0 >= ranked[1].0 + STANDALONE_MARGIN {
        return ranked[0].1.to_string();
    }

    ranked
        .iter()
        .take(max_joined)
        .map(|(_, entry)| *entry)
        .collect::<Vec<_>>()
        .join(JOIN_DELIMITER)
}
