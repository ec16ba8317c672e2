//! # fiberlens
//!
//! Extracts a product's fabric composition ("80% Cotton, 20% Polyester")
//! from an arbitrary, unstructured retail product page, with no
//! site-specific configuration.
//!
//! Three harvesters run over each page: embedded JSON-LD product metadata
//! (explicit material fields, named properties, description text), a
//! fine-grained pass over small DOM text nodes, and a coarse pass over
//! large text blocks. Their candidates are deduplicated, stripped of
//! subsumed fragments, scored for how much they read like a composition
//! label rather than marketing prose, and the best one wins with a
//! confidence tier derived from pattern strength.
//!
//! ## Quick Start
//!
//! ```rust
//! use fiberlens::extract;
//!
//! let html = r#"<html><body>
//! <ul><li>Fabric: 100% Merino Wool</li><li>Machine wash cold</li></ul>
//! </body></html>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.materials.as_deref(), Some("Fabric: 100% Merino Wool"));
//! # Ok::<(), fiberlens::Error>(())
//! ```
//!
//! High-confidence results are always pattern-verified; recall is not
//! guaranteed. Pages with nothing extractable yield the canonical
//! negative result rather than an error.

mod error;
mod extract;
mod hits;
mod options;
mod patterns;
mod phrase;
mod postprocess;
mod result;
mod text;

/// Read-only DOM adapter over `dom_query`.
pub mod dom;

/// Harvester passes (structured data, DOM leaf, DOM container).
pub mod harvest;

/// Relevance scoring, blob rejection, and candidate selection.
pub mod scoring;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{Confidence, ExtractResult, MaterialCandidate, Provenance, Source};

/// Extracts the fabric composition from an HTML document using default
/// options.
///
/// # Returns
///
/// `Ok(ExtractResult)` for any non-blank document; a page without
/// extractable composition yields `materials: None` with confidence
/// `none`, not an error.
///
/// # Example
///
/// ```rust
/// use fiberlens::extract;
///
/// let html = "<html><body><p>Made from a breathable 55% linen blend.</p></body></html>";
/// let result = extract(html)?;
/// assert_eq!(result.materials.as_deref(), Some("55% linen"));
/// # Ok::<(), fiberlens::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the fabric composition from an HTML document with custom
/// options.
///
/// # Example
///
/// ```rust
/// use fiberlens::{extract_with_options, Options};
///
/// let html = "<html><body><li>Shell: 100% Cotton</li></body></html>";
/// let options = Options { max_hits: 2, ..Options::default() };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.materials.as_deref(), Some("Shell: 100% Cotton"));
/// # Ok::<(), fiberlens::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_materials(html, options)
}
