//! Error types for rs-distiller.
//!
//! Only the front door can fail. Block building, the filter pipeline and
//! image scoring are total over their inputs and report "nothing happened"
//! through their return values instead.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML parsing failed, or produced a tree without a root element.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// Character encoding detection or conversion failed.
    #[error("Encoding detection failed: {0}")]
    EncodingError(String),

    /// The supplied options are inconsistent.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
