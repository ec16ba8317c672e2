//! Error types for fiberlens.
//!
//! The pipeline itself is total: malformed structured data is skipped at
//! the document it came from, and "nothing found" is a result, not an
//! error. The only library error is refusing blank input.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document was empty or whitespace-only.
    #[error("empty document")]
    EmptyDocument,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
