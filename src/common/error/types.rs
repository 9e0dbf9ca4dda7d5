//! Unified error types for deckwright.
use thiserror::Error;

/// Main error type for deckwright operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog or settings document
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid value supplied by the caller
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Export failed as a whole
    #[error("Export failed: {0}")]
    Export(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for deckwright operations.
pub type Result<T> = std::result::Result<T, Error>;
