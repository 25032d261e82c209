//! Error types for document reading and artifact persistence
//!
//! The engine itself never fails on malformed markup (irregularities are
//! data, reported in the output structure); only I/O-adjacent operations
//! return these errors.

use thiserror::Error;

/// Errors raised by document reading and artifact save/load
#[derive(Debug, Error)]
pub enum TagError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Path has no usable file name to derive an artifact name from
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, TagError>;
