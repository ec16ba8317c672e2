//! Thin read-only adapter over `dom_query`.
//!
//! The document tree is an external collaborator: the pipeline reads text
//! content per invocation and never mutates a node. Keeping the two
//! operations it needs behind this adapter keeps the harvesters free of
//! parser types.

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get all rendered text content of a node and its descendants.
///
/// Returns `StrTendril` for zero-copy passing; it derefs to `str`.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}
