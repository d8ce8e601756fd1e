//! Error types for the settings field bridge.

use thiserror::Error;

/// Error type for converting between a settings value and its flat field map.
///
/// Raised while binding command-line values or decoding a stored section.
/// The resolver recovers from every variant locally.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The settings type does not serialize to a flat object.
    #[error("Settings section '{section}' must serialize to an object of fields")]
    NotFlat {
        /// Section name of the offending schema
        section: &'static str,
    },

    /// Serializing or deserializing the settings value failed.
    #[error("Failed to convert settings fields: {0}")]
    Convert(#[from] serde_json::Error),

    /// A raw command-line value could not be converted to the field's type.
    #[error("Cannot bind '{raw}' to field '{field}': expected {expected}")]
    Binding {
        /// Field the value was meant for
        field: String,
        /// The raw command-line value
        raw: String,
        /// Human-readable name of the expected type
        expected: &'static str,
    },
}
