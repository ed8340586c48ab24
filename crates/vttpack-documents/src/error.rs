//! Error types for document decoding, hydration and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the structured text codecs.
#[derive(Debug, Error)]
pub enum FormatError {
    /// JSON encoding or decoding failed.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding failed.
    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors that can occur while turning store records into documents.
#[derive(Debug, Error)]
pub enum Error {
    /// Store access error.
    #[error("{0}")]
    Store(#[from] vttpack_store::Error),

    /// No document variant is registered for a collection tag.
    #[error("structure not found for type {0}")]
    StructureNotFound(String),

    /// A key that does not address a primary document.
    #[error("{0} is not a primary document key")]
    NotPrimary(String),

    /// A record value could not be mapped onto its document variant.
    #[error("cannot map document data for {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: FormatError,
    },

    /// An embedded document referenced by its parent is absent.
    #[error("embedded document {key} not found")]
    MissingChild { key: String },

    /// An embedded document stored under a key for a different id.
    #[error("embedded document {key} has id {found}")]
    IdMismatch { key: String, found: String },

    /// A document could not be rendered to the output format.
    #[error("cannot render {key}: {source}")]
    Render {
        key: String,
        #[source]
        source: FormatError,
    },

    /// A rendered document could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, Error>;
