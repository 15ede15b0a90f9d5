//! Error types for document construction and rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or persisting a document.
#[derive(Debug, Error)]
pub enum Error {
    /// A positional row did not match the current header count.
    #[error("row length ({row_len}) does not match header length ({header_len})")]
    ShapeMismatch { row_len: usize, header_len: usize },

    /// A row key or sort key is not a known header and header growth is
    /// disallowed.
    #[error("key `{0}` not in headers")]
    UnknownKey(String),

    /// A sort was requested without a sort key configured.
    #[error("sort_key not set")]
    MissingSortKey,

    /// A dynamic input held something that cannot become a cell value.
    #[error("unsupported cell value: {0}")]
    UnsupportedValue(String),

    /// No reader handles the given file format.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The document's destination file already exists and overwriting was
    /// not enabled.
    #[error("file `{}` already exists", .0.display())]
    DestinationExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
