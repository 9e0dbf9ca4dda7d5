/// Error types for export operations.
use super::sink::SinkError;
use thiserror::Error;

/// Failure of an export as a whole.
///
/// Per-element problems never surface here; they are recovered with a
/// placeholder and listed in the export report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The sink could not produce the final document
    #[error("Failed to serialize presentation: {0}")]
    Serialization(#[source] SinkError),

    /// Another export is still running
    #[error("An export is already in progress")]
    AlreadyExporting,

    /// The background export task panicked or was cancelled
    #[error("Export task failed: {0}")]
    Task(String),
}
