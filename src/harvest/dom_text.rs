//! DOM text harvesters: two independent passes of differing granularity.
//!
//! The leaf pass trusts small, already-isolated elements and reads them
//! whole. The container pass tears large blocks apart on bullet, newline,
//! and pipe delimiters and holds each chunk to a tighter length bound,
//! since container text is noisier. Both stop as soon as the hit cap is
//! reached; on containers that matters most, because the reliable chunks
//! come early.

use dom_query::{Document, Selection};

use crate::dom;
use crate::hits::RawHits;
use crate::options::Options;
use crate::patterns;
use crate::result::{MaterialCandidate, Provenance};
use crate::text;

/// Fine-grained pass over short, isolated text nodes.
#[must_use]
pub fn harvest_leaves(doc: &Document, options: &Options) -> Option<MaterialCandidate> {
    let mut hits = RawHits::new(options.max_hits);

    for node in doc.select(patterns::LEAF_SELECTOR).nodes() {
        if hits.is_full() {
            break;
        }
        let sel = Selection::from(*node);
        let line = text::normalize(&dom::text_content(&sel));
        if line.is_empty() || line.chars().count() > options.leaf_text_max {
            continue;
        }
        hits.absorb(&line);
    }

    super::finish(&hits, Provenance::DomLeaf, options)
}

/// Coarse pass over large structural blocks.
#[must_use]
pub fn harvest_containers(doc: &Document, options: &Options) -> Option<MaterialCandidate> {
    let mut hits = RawHits::new(options.max_hits);

    'blocks: for node in doc.select(patterns::CONTAINER_SELECTOR).nodes() {
        let sel = Selection::from(*node);
        let raw = dom::text_content(&sel);
        let raw = raw.trim();
        if raw.is_empty() || raw.chars().count() > options.container_block_max {
            continue;
        }

        for part in patterns::ENTRY_SPLIT.split(raw) {
            let chunk = text::normalize(part);
            if chunk.is_empty() || chunk.chars().count() > options.container_chunk_max {
                continue;
            }
            hits.absorb(&chunk);
            if hits.is_full() {
                break 'blocks;
            }
        }
    }

    super::finish(&hits, Provenance::DomContainer, options)
}
