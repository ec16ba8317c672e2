//! Capped accumulator for raw harvester hits.
//!
//! Every harvester pass collects into a `RawHits`: uniqueness by normalized
//! lowercase form, insertion order preserved, size capped so worst-case work
//! on a pathological page stays proportional to its text-bearing elements.

use std::collections::HashSet;

use crate::phrase;
use crate::text;

/// Join delimiter between co-equal composition facts.
pub const JOIN_DELIMITER: &str = " • ";

/// An ordered, deduplicated, capped set of raw hit strings.
#[derive(Debug)]
pub struct RawHits {
    cap: usize,
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl RawHits {
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            entries: Vec::with_capacity(cap),
            seen: HashSet::with_capacity(cap),
        }
    }

    /// Adds an already-normalized entry. Returns false when the entry was
    /// empty, a duplicate, or the accumulator is full.
    pub fn push(&mut self, entry: &str) -> bool {
        if entry.is_empty() || self.is_full() {
            return false;
        }
        if !self.seen.insert(entry.to_lowercase()) {
            return false;
        }
        self.entries.push(entry.to_string());
        true
    }

    /// Feeds one normalized line through the hit-accumulation logic:
    /// excluded lines contribute nothing, clean labeled lines are kept
    /// whole, everything else is mined for composition phrases.
    pub fn absorb(&mut self, line: &str) {
        if text::is_excluded(line) {
            return;
        }
        if phrase::is_labeled_line(line) {
            self.push(line);
            return;
        }
        for found in phrase::extract_phrases(line, self.remaining()) {
            self.push(&found);
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.cap
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remaining(&self) -> usize {
        self.cap.saturating_sub(self.entries.len())
    }

    /// Joins the collected hits into one raw string for post-processing.
    #[must_use]
    pub fn join(&self) -> String {
        self.entries.join(JOIN_DELIMITER)
    }
}
