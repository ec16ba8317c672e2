//! Result types: candidates during selection, and the outbound record.

use serde::{Deserialize, Serialize};

use crate::text;

/// Signal strength of the final result, derived from which lexical
/// patterns the winning string matches. Never independently settable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(label)
    }
}

/// Where a candidate came from. Fixed at creation, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// An explicit material field (or material-named property) in
    /// structured product metadata.
    StructuredExplicit,
    /// Material-looking phrases found in a structured-data description.
    StructuredDescription,
    /// The fine-grained DOM pass over small, isolated text nodes.
    DomLeaf,
    /// The coarse DOM pass over large text blocks.
    DomContainer,
}

impl Provenance {
    /// Ceiling on the confidence a candidate from this source can carry.
    /// Description text is never trusted beyond medium.
    #[must_use]
    pub(crate) fn confidence_ceiling(self) -> Confidence {
        match self {
            Self::StructuredDescription => Confidence::Medium,
            _ => Confidence::High,
        }
    }

    /// The wire-level source label. Both structured variants report as
    /// `jsonld`.
    #[must_use]
    pub fn source(self) -> Source {
        match self {
            Self::StructuredExplicit | Self::StructuredDescription => Source::Jsonld,
            Self::DomLeaf => Source::DomLeaf,
            Self::DomContainer => Source::DomContainer,
        }
    }
}

/// Wire-level provenance of the outbound response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    #[default]
    None,
    Jsonld,
    DomLeaf,
    DomContainer,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::None => "none",
            Self::Jsonld => "jsonld",
            Self::DomLeaf => "dom_leaf",
            Self::DomContainer => "dom_container",
        };
        f.write_str(label)
    }
}

/// One source's final display string, competing for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialCandidate {
    /// Normalized display string, e.g. "80% Cotton, 20% Polyester".
    pub text: String,
    pub source: Provenance,
    pub confidence: Confidence,
}

impl MaterialCandidate {
    /// Builds a candidate with its confidence derived from pattern
    /// strength (percent beats fiber beats neither), capped by what the
    /// source is allowed to claim.
    #[must_use]
    pub fn new(text: String, source: Provenance) -> Self {
        let tier = if text::has_percent(&text) {
            Confidence::High
        } else if text::has_fiber(&text) {
            Confidence::Medium
        } else {
            Confidence::Low
        };
        let confidence = tier.min(source.confidence_ceiling());
        Self { text, source, confidence }
    }
}

/// The outbound response record: exactly the three fields the display
/// surface consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// The winning display string, absent when nothing qualified.
    pub materials: Option<String>,
    pub confidence: Confidence,
    pub source: Source,
}

impl ExtractResult {
    /// The canonical negative result. All failure modes collapse to this.
    #[must_use]
    pub fn not_found() -> Self {
        Self::default()
    }
}

impl From<MaterialCandidate> for ExtractResult {
    fn from(candidate: MaterialCandidate) -> Self {
        Self {
            materials: Some(candidate.text),
            confidence: candidate.confidence,
            source: candidate.source.source(),
        }
    }
}
