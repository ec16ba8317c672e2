//! Compiled regex patterns and CSS selectors for composition extraction.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! The fiber and exclusion vocabularies are fixed: they carry no lifecycle
//! concerns and are never mutated after initialization.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Alternation of the fixed fiber/material vocabulary.
/// Shared between [`FIBER`] and [`COMPOSITION_PHRASE`] so the two can
/// never drift apart.
const FIBER_ALTERNATION: &str = "cotton|linen|wool|silk|polyester|nylon|spandex|elastane|viscose|rayon|acrylic|lyocell|tencel|modal|cashmere|hemp|leather|suede|down|alpaca|mohair";

// =============================================================================
// Lexical Matchers
// =============================================================================

/// Matches a percentage token: 1-3 digits, optional whitespace, percent sign.
pub static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,3}\s*%").expect("PERCENT regex"));

/// Matches any fiber name at word boundaries, case-insensitively.
/// Boundaries matter: "down" must not fire inside "download".
pub static FIBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{FIBER_ALTERNATION})\b")).expect("FIBER regex")
});

/// Matches marketing/noise terms that disqualify a string outright.
/// Bare substrings, no boundaries: "% off" cannot take them, and the
/// vocabulary is short enough that collisions are acceptable noise.
pub static EXCLUDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(save|discount|subscribe|sign up|coupon|reward|sale|% off)")
        .expect("EXCLUDED regex")
});

// =============================================================================
// Phrase Extraction
// =============================================================================

/// Matches a minimal composition clause inside longer text:
/// `<percent> <0-3 words> <fiber>`, ending at a word boundary.
/// This is what pulls "55% linen" out of "a breathable 55% linen blend".
pub static COMPOSITION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b\d{{1,3}}\s*%\s*(?:[a-z]+\s+){{0,3}}(?:{FIBER_ALTERNATION})\b"
    ))
    .expect("COMPOSITION_PHRASE regex")
});

// =============================================================================
// Scoring Vocabularies
// =============================================================================

/// Marketing adjectives that soften an entry during post-processing.
pub static MARKETING_ADJECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(soft|premium|comfortable|comfort|perfect|everyday|luxurious|stylish|versatile)\b",
    )
    .expect("MARKETING_ADJECTIVE regex")
});

/// Narrative marketing tone that penalizes a final candidate.
pub static NARRATIVE_TONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\bcozy\b|\bwarm\b|\bembrace\b|\bhugged\b|\brevamped\b|designed in-house|authentic touch|no-gimmicks|\belegant\b)")
        .expect("NARRATIVE_TONE regex")
});

/// Matches clearly labeled spec formatting: a garment-part label followed
/// by a colon at the start of the line ("Shell: 100% Cotton").
pub static SPEC_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(shell|lining|body|fabric|trim|pocket|fill|outer|inner)\s*:")
        .expect("SPEC_LABEL regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Splits blocks and joined strings into entries: newline runs, bullets,
/// middle dots, and pipes. The same rule is used on ingestion and when a
/// joined candidate is split back apart.
pub static ENTRY_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+|•|·|\|").expect("ENTRY_SPLIT regex"));

// =============================================================================
// Field Names & CSS Selectors
// =============================================================================

/// Metadata field keys that explicitly hold material information.
pub const MATERIAL_FIELD_NAMES: [&str; 4] = ["material", "materials", "fabric", "composition"];

/// Small, already-isolated text-bearing elements for the leaf pass.
pub const LEAF_SELECTOR: &str = "li, dd, p, span, td";

/// Larger structural elements for the container pass.
pub const CONTAINER_SELECTOR: &str = "section, article, div";

/// Embedded structured-data script blocks.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_requires_word_edge() {
        assert!(PERCENT.is_match("80% cotton"));
        assert!(PERCENT.is_match("100 % wool"));
        assert!(!PERCENT.is_match("cotton blend"));
    }

    #[test]
    fn fiber_matches_at_word_boundaries() {
        assert!(FIBER.is_match("100% Merino Wool"));
        assert!(FIBER.is_match("SUEDE trim"));
        assert!(!FIBER.is_match("download the app"));
    }

    #[test]
    fn excluded_matches_substrings() {
        assert!(EXCLUDED.is_match("20% off everything"));
        assert!(EXCLUDED.is_match("Subscribe for updates"));
        assert!(!EXCLUDED.is_match("80% cotton, 20% polyester"));
    }

    #[test]
    fn composition_phrase_allows_up_to_three_interior_words() {
        assert!(COMPOSITION_PHRASE.is_match("a breathable 55% linen blend"));
        assert!(COMPOSITION_PHRASE.is_match("60% recycled organic brushed cotton"));
        assert!(!COMPOSITION_PHRASE.is_match("60% one two three four cotton"));
    }

    #[test]
    fn spec_label_anchors_at_line_start() {
        assert!(SPEC_LABEL.is_match("Shell: 100% Cotton"));
        assert!(SPEC_LABEL.is_match("  lining : 100% polyester"));
        assert!(!SPEC_LABEL.is_match("The shell: is durable"));
    }
}
