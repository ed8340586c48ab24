//! Error types for unpack runs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an unpack run or a single pack's pass.
#[derive(Debug, Error)]
pub enum Error {
    /// The pack directory is missing, unreadable or not a directory.
    #[error("cannot access directory \"{path}\": {reason}")]
    Directory { path: PathBuf, reason: String },

    /// Store error.
    #[error("{0}")]
    Store(#[from] vttpack_store::Error),

    /// Document error.
    #[error("{0}")]
    Documents(#[from] vttpack_documents::Error),
}

/// Result type for unpack operations.
pub type Result<T> = std::result::Result<T, Error>;
