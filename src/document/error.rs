//! Error types for document persistence.

use std::path::PathBuf;

use thiserror::Error;

use crate::settings::FieldError;

/// Error type for reading, encoding, or writing a settings document.
///
/// Read-side problems reach callers as [`super::LoadResult`] variants
/// instead; this type surfaces through writes.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read the document file.
    #[error("Failed to read document '{}': {source}", path.display())]
    FileRead {
        /// Path to the document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the document file.
    #[error("Failed to write document '{}': {source}", path.display())]
    FileWrite {
        /// Path to the document
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The existing document could not be read or parsed, so it was not written.
    #[error("Refusing to overwrite unreadable document '{}': {reason}", path.display())]
    Unreadable {
        /// Path to the document
        path: PathBuf,
        /// Why the document could not be read
        reason: String,
    },

    /// JSON parsing or encoding failed.
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed.
    #[error("Invalid TOML document: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML encoding failed.
    #[error("Failed to encode TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The settings value could not be turned into fields.
    #[error(transparent)]
    Field(#[from] FieldError),
}
