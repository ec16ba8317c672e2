//! Configuration options for materials extraction.
//!
//! These are the static resource caps from the resource model plus the
//! selection margin. The defaults are calibrated against real product
//! pages; they bound worst-case work, they are not derived from a formal
//! model.

/// Configuration options for materials extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use fiberlens::Options;
///
/// let options = Options {
///     max_hits: 2,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum raw hits collected per harvester pass, and the maximum
    /// entries joined into one display string.
    ///
    /// Default: `4`
    pub max_hits: usize,

    /// Upper character bound on a leaf node's text. Guards against
    /// accidentally selecting a giant wrapper element, while staying
    /// generous enough that a descriptive paragraph still reaches the
    /// phrase extractor.
    ///
    /// Default: `600`
    pub leaf_text_max: usize,

    /// Upper character bound on a container block's raw text. Guards
    /// against scanning entire page bodies.
    ///
    /// Default: `8000`
    pub container_block_max: usize,

    /// Upper character bound on a single container chunk after splitting.
    /// Shorter than the leaf bound: container chunks are less trustworthy.
    ///
    /// Default: `220`
    pub container_chunk_max: usize,

    /// Upper character bound on one structured-data entry.
    ///
    /// Default: `220`
    pub entry_max: usize,

    /// Points by which a lower-priority candidate must beat the incumbent
    /// to displace it. Keeps structured data ahead of DOM text on near
    /// ties.
    ///
    /// Default: `2`
    pub tie_break_margin: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_hits: 4,
            leaf_text_max: 600,
            container_block_max: 8000,
            container_chunk_max: 220,
            entry_max: 220,
            tie_break_margin: 2,
        }
    }
}
