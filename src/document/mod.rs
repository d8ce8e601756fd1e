//! Persisted settings document.
//!
//! A document is an ordered list of named top-level sections. One section
//! holds the flat field map of a settings schema; every other section is
//! opaque and is written back exactly as it was read.
//!
//! This module provides:
//! - The format seam ([`DocumentFormat`]) with [`JsonFormat`] and [`TomlFormat`]
//! - The ordered section container ([`SectionList`])
//! - The file-backed store ([`SettingsDocument`]) with soft-failing loads

mod error;
mod file;
mod json_format;
mod sections;
mod toml_format;


pub use error::DocumentError;
pub use file::SettingsDocument;
pub use json_format::JsonFormat;
pub use sections::SectionList;
pub use toml_format::TomlFormat;

use crate::settings::FieldMap;

/// Result of loading one section from the persisted document.
///
/// Every variant other than `Loaded` means "use defaults": a missing or
/// unreadable document is never an error for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult {
    /// The section was found and decoded.
    Loaded(FieldMap),

    /// No document exists at the path.
    NotFound,

    /// The document exists but has no section with this name.
    MissingSection,

    /// The document or section could not be read or parsed.
    Corrupted {
        /// Reason for corruption (for logging/debugging).
        reason: String,
    },
}

impl LoadResult {
    /// Returns the loaded fields, or `None` for every fallback variant.
    #[must_use]
    pub fn into_fields(self) -> Option<FieldMap> {
        match self {
            Self::Loaded(fields) => Some(fields),
            Self::NotFound | Self::MissingSection | Self::Corrupted { .. } => None,
        }
    }

    /// Returns `true` if the section was successfully loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// A structured text format holding named top-level sections.
///
/// Implementations keep untouched sections in their own representation so
/// that a write which replaces one section reproduces all others.
pub trait DocumentFormat {
    /// Format-specific representation of one section's value.
    type Section;

    /// Parses document text into its ordered sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid document of named sections.
    fn parse(&self, text: &str) -> Result<SectionList<Self::Section>, DocumentError>;

    /// Decodes a section into a flat field map.
    ///
    /// # Errors
    ///
    /// Returns an error if the section is not a mapping of fields.
    fn decode_section(&self, section: &Self::Section) -> Result<FieldMap, DocumentError>;

    /// Encodes a flat field map as a section value.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be represented in this format.
    fn encode_section(&self, fields: &FieldMap) -> Result<Self::Section, DocumentError>;

    /// Renders the sections back into document text.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    fn render(&self, sections: &SectionList<Self::Section>) -> Result<String, DocumentError>;
}
