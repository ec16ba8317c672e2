//! Harvester passes over the page's two kinds of material source:
//! embedded structured product metadata and rendered DOM text.
//!
//! Each pass yields at most one [`MaterialCandidate`]: its raw hits joined
//! and collapsed by the post-processor. The orchestrator treats all
//! sources uniformly when scoring and selecting.

pub mod dom_text;
pub mod json_ld;

use crate::hits::RawHits;
use crate::options::Options;
use crate::postprocess;
use crate::result::{MaterialCandidate, Provenance};

/// Collapses a finished hit pool into this pass's single candidate.
fn finish(hits: &RawHits, source: Provenance, options: &Options) -> Option<MaterialCandidate> {
    if hits.is_empty() {
        return None;
    }
    postprocess::collapse(&hits.join(), options.max_hits)
        .map(|display| MaterialCandidate::new(display, source))
}
