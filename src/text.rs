//! Text normalization and the lexical predicates.
//!
//! These are the foundation of the pipeline: every harvester and scorer
//! goes through these functions rather than touching the regexes directly.

use crate::patterns;

/// Canonical form for comparison and display: whitespace runs collapsed to
/// a single space, leading/trailing whitespace trimmed, trailing periods
/// stripped.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
#[must_use]
pub fn normalize(text: &str) -> String {
    let collapsed = patterns::WHITESPACE.replace_all(text, " ");
    let mut trimmed = collapsed.trim();
    // Stripping a period run can expose another one behind a space
    // (". ."), so strip to a fixed point.
    loop {
        let stripped = trimmed.trim_end_matches('.').trim_end();
        if stripped == trimmed {
            return trimmed.to_string();
        }
        trimmed = stripped;
    }
}

/// True iff the text contains a percentage token ("80%", "100 %").
#[must_use]
pub fn has_percent(text: &str) -> bool {
    patterns::PERCENT.is_match(text)
}

/// True iff the text mentions a known fiber name.
#[must_use]
pub fn has_fiber(text: &str) -> bool {
    patterns::FIBER.is_match(text)
}

/// True iff the text contains marketing/noise vocabulary.
/// Exclusion overrides acceptance everywhere in the pipeline.
#[must_use]
pub fn is_excluded(text: &str) -> bool {
    patterns::EXCLUDED.is_match(text)
}

/// The core acceptance predicate: a percentage and a fiber name, and no
/// noise vocabulary.
#[must_use]
pub fn is_material_candidate(text: &str) -> bool {
    !text.is_empty() && has_percent(text) && has_fiber(text) && !is_excluded(text)
}

/// True iff a metadata field key exactly names a material field.
#[must_use]
pub fn is_material_field_name(name: &str) -> bool {
    patterns::MATERIAL_FIELD_NAMES
        .iter()
        .any(|field| name.eq_ignore_ascii_case(field))
}

/// Laxer check for freeform property names: the name merely contains a
/// material word ("Fabric composition", "Shell material").
#[must_use]
pub fn mentions_material_concept(name: &str) -> bool {
    let lowered = name.to_lowercase();
    patterns::MATERIAL_FIELD_NAMES
        .iter()
        .any(|field| lowered.contains(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_trailing_period() {
        assert_eq!(normalize("  80%   Cotton,\n 20% Polyester. "), "80% Cotton, 20% Polyester");
    }

    #[test]
    fn normalize_keeps_interior_periods() {
        assert_eq!(
            normalize("Shell: 100% Cotton. Lining: 100% Polyester"),
            "Shell: 100% Cotton. Lining: 100% Polyester"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["  80%  cotton. ", "plain", "trailing dots...", "a . b .", "", " .\n."] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn normalize_strips_period_runs_interleaved_with_spaces() {
        assert_eq!(normalize(" .\n."), "");
        assert_eq!(normalize("fine knit. . ."), "fine knit");
        assert_eq!(normalize(". . intro kept"), ". . intro kept");
    }

    #[test]
    fn exclusion_dominates_percent_and_fiber() {
        let s = "Save 20% on all wool coats!";
        assert!(has_percent(s));
        assert!(has_fiber(s));
        assert!(!is_material_candidate(s));
    }

    #[test]
    fn material_candidate_needs_both_signals() {
        assert!(is_material_candidate("80% cotton, 20% polyester"));
        assert!(!is_material_candidate("80% blend"));
        assert!(!is_material_candidate("pure cotton"));
        assert!(!is_material_candidate(""));
    }

    #[test]
    fn field_name_matching_is_exact_but_case_insensitive() {
        assert!(is_material_field_name("Material"));
        assert!(is_material_field_name("FABRIC"));
        assert!(!is_material_field_name("materialCare"));
    }

    #[test]
    fn concept_mention_is_a_substring_check() {
        assert!(mentions_material_concept("Fabric composition"));
        assert!(mentions_material_concept("Shell material"));
        assert!(!mentions_material_concept("Care instructions"));
    }
}
