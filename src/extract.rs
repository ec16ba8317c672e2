//! Extraction orchestrator: one synchronous request/response computation.
//!
//! Parses the page once, runs the three harvesters independently, and
//! ranks their candidates. Every failure mode short of blank input
//! collapses into the canonical "nothing found" result: for this use
//! case, false positives are worse than silence.

use crate::dom;
use crate::error::{Error, Result};
use crate::harvest;
use crate::options::Options;
use crate::result::{ExtractResult, MaterialCandidate};
use crate::scoring;

pub(crate) fn extract_materials(html: &str, options: &Options) -> Result<ExtractResult> {
    if html.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }

    let doc = dom::parse(html);

    // Source-priority order: structured data, then leaf, then container.
    let mut candidates: Vec<MaterialCandidate> = Vec::with_capacity(3);
    candidates.extend(harvest::json_ld::harvest(&doc, options));
    candidates.extend(harvest::dom_text::harvest_leaves(&doc, options));
    candidates.extend(harvest::dom_text::harvest_containers(&doc, options));

    Ok(scoring::select(candidates, options)
        .map_or_else(ExtractResult::not_found, ExtractResult::from))
}
