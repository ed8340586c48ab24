//! Error types for store access.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading a pack store.
#[derive(Debug, Error)]
pub enum Error {
    /// The store could not be opened.
    #[error("cannot open store \"{path}\": {reason}")]
    Open { path: PathBuf, reason: String },

    /// The storage engine reported a failure while reading.
    #[error("store error: {0}")]
    Backend(String),

    /// The store handle is already in use by another operation.
    #[error("store handle is busy")]
    Busy,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
