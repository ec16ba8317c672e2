//! Relevance scoring and final candidate selection.
//!
//! Scores measure "reads like a composition label" against "reads like
//! marketing prose". The constants below are empirically calibrated
//! tunables: higher is better and description blobs are rejected outright,
//! but the specific numbers carry no deeper meaning.

use crate::options::Options;
use crate::patterns;
use crate::result::MaterialCandidate;
use crate::text;

/// Awarded when the candidate contains a percentage token.
pub const PERCENT_BONUS: i32 = 10;
/// Awarded per distinct fiber name present.
pub const FIBER_BONUS: i32 = 2;
/// Digit-density bonus cap: one point per digit, at most this many.
pub const DIGIT_BONUS_CAP: i32 = 4;
/// Subtracted once past [`LONG_TEXT`] characters and again past
/// [`BLOB_LENGTH`] (cumulative).
pub const LENGTH_PENALTY: i32 = 8;
/// First length threshold.
pub const LONG_TEXT: usize = 220;
/// Second length threshold; also the blob-rejection length.
pub const BLOB_LENGTH: usize = 350;
/// Subtracted for the first terminal punctuation mark.
pub const SENTENCE_PENALTY: i32 = 4;
/// Subtracted additionally for the second.
pub const SENTENCE_PENALTY_EXTRA: i32 = 6;
/// Flat relief on the length penalty for labeled spec lines, floored at 0.
pub const LABELED_LENGTH_RELIEF: i32 = 8;
/// Flat relief on the sentence penalty for labeled spec lines, floored at 0.
pub const LABELED_SENTENCE_RELIEF: i32 = 5;
/// Subtracted when narrative marketing tone is present.
pub const NARRATIVE_PENALTY: i32 = 6;
/// Subtracted when the candidate is shorter than [`MIN_TEXT`] characters.
pub const SHORT_PENALTY: i32 = 5;
/// Candidates below this length take the short penalty.
pub const MIN_TEXT: usize = 6;
/// Blob rejection fires only below this score.
pub const BLOB_SCORE_FLOOR: i32 = 20;

/// Heuristic relevance of one final candidate string.
#[must_use]
pub fn relevance_score(candidate: &str) -> i32 {
    let mut score = 0;
    if text::has_percent(candidate) {
        score += PERCENT_BONUS;
    }
    score += FIBER_BONUS * distinct_fiber_count(candidate);

    let digits = candidate.chars().filter(char::is_ascii_digit).count();
    score += i32::try_from(digits).unwrap_or(DIGIT_BONUS_CAP).min(DIGIT_BONUS_CAP);

    let length = candidate.chars().count();
    let mut length_penalty = 0;
    if length > LONG_TEXT {
        length_penalty += LENGTH_PENALTY;
    }
    if length > BLOB_LENGTH {
        length_penalty += LENGTH_PENALTY;
    }

    let marks = terminal_punctuation(candidate);
    let mut sentence_penalty = 0;
    if marks >= 1 {
        sentence_penalty += SENTENCE_PENALTY;
    }
    if marks >= 2 {
        sentence_penalty += SENTENCE_PENALTY_EXTRA;
    }

    // Labeled spec lines legitimately run long and carry periods between
    // parts, so both penalties are relieved by a flat amount.
    if patterns::SPEC_LABEL.is_match(candidate) {
        length_penalty = (length_penalty - LABELED_LENGTH_RELIEF).max(0);
        sentence_penalty = (sentence_penalty - LABELED_SENTENCE_RELIEF).max(0);
    }
    score -= length_penalty + sentence_penalty;

    if patterns::NARRATIVE_TONE.is_match(candidate) {
        score -= NARRATIVE_PENALTY;
    }
    if length < MIN_TEXT {
        score -= SHORT_PENALTY;
    }
    score
}

/// A long, low-scoring string with sentence punctuation is a description
/// blob: prose that incidentally contains composition-like tokens. It is
/// rejected regardless of how the competition scores.
#[must_use]
pub fn is_description_blob(candidate: &str, score: i32) -> bool {
    candidate.chars().count() > BLOB_LENGTH
        && score < BLOB_SCORE_FLOOR
        && terminal_punctuation(candidate) >= 1
}

/// Picks the winner among the per-source candidates, which must arrive in
/// source-priority order (structured, leaf, container). A later candidate
/// displaces the incumbent only by beating it by the tie-break margin.
#[must_use]
pub fn select(candidates: Vec<MaterialCandidate>, options: &Options) -> Option<MaterialCandidate> {
    let mut best: Option<(MaterialCandidate, i32)> = None;
    for candidate in candidates {
        let score = relevance_score(&candidate.text);
        if is_description_blob(&candidate.text, score) {
            continue;
        }
        best = match best {
            None => Some((candidate, score)),
            Some((held, held_score)) => {
                if score >= held_score + options.tie_break_margin {
                    Some((candidate, score))
                } else {
                    Some((held, held_score))
                }
            }
        };
    }
    best.map(|(candidate, _)| candidate)
}

fn distinct_fiber_count(candidate: &str) -> i32 {
    let mut names: Vec<String> = Vec::new();
    for found in patterns::FIBER.find_iter(candidate) {
        let name = found.as_str().to_lowercase();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    i32::try_from(names.len()).unwrap_or(i32::MAX)
}

fn terminal_punctuation(candidate: &str) -> usize {
    candidate.chars().filter(|c| matches!(c, '.' | '!' | '?')).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{Provenance, Source};

    #[test]
    fn labeled_percent_line_scores_high() {
        let score = relevance_score("Shell: 100% Cotton, 20% Elastane");
        // Percent, two fibers, five digits capped at four, no penalties.
        assert_eq!(score, PERCENT_BONUS + 2 * FIBER_BONUS + DIGIT_BONUS_CAP);
    }

    #[test]
    fn narrative_tone_and_short_text_are_penalized() {
        assert!(relevance_score("cozy wool") < relevance_score("100% wool"));
        assert!(relevance_score("wool") < relevance_score("merino wool"));
    }

    #[test]
    fn prose_paragraph_is_rejected_as_blob() {
        let filler = "This piece was made for slow mornings and long walks through the city. ";
        let mut blob = filler.repeat(5);
        blob.push_str("It blends 30% cotton into the weave. You will reach for it again and again");
        assert!(blob.chars().count() > BLOB_LENGTH);

        let score = relevance_score(&blob);
        assert!(score < BLOB_SCORE_FLOOR);
        assert!(is_description_blob(&blob, score));

        let candidate = MaterialCandidate::new(blob, Provenance::DomContainer);
        assert!(select(vec![candidate], &Options::default()).is_none());
    }

    #[test]
    fn short_extracted_phrase_is_not_a_blob() {
        let score = relevance_score("60% cashmere");
        assert!(!is_description_blob("60% cashmere", score));
    }

    #[test]
    fn incumbent_survives_a_tie() {
        let structured =
            MaterialCandidate::new("80% Wool, 20% Nylon".into(), Provenance::StructuredExplicit);
        let leaf = MaterialCandidate::new("80% Wool, 20% Nylon".into(), Provenance::DomLeaf);
        let winner = select(vec![structured, leaf], &Options::default());
        assert_eq!(winner.map(|c| c.source.source()), Some(Source::Jsonld));
    }

    #[test]
    fn challenger_needs_the_full_margin() {
        // The second fiber and extra digits clear the margin, so it wins.
        let weaker = MaterialCandidate::new("80% Wool blend".into(), Provenance::StructuredExplicit);
        let stronger =
            MaterialCandidate::new("80% Wool, 20% Nylon".into(), Provenance::DomLeaf);
        let winner = select(vec![weaker, stronger], &Options::default());
        assert_eq!(winner.map(|c| c.source.source()), Some(Source::DomLeaf));
    }
}
