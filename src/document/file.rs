//! File-backed settings document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::settings::FieldMap;

use super::{DocumentError, DocumentFormat, JsonFormat, LoadResult, SectionList, TomlFormat};

/// Raw outcome of reading the whole document.
enum ReadOutcome<T> {
    Parsed(SectionList<T>),
    NotFound,
    Corrupted(String),
}

/// A settings document on disk.
///
/// Loads never fail: a missing, unreadable, or malformed document is
/// reported as a [`LoadResult`] variant. Writes replace one section and
/// keep every other section as read; a document that cannot be read is
/// left as it is.
///
/// # Atomic Writes
///
/// Uses write-to-temp-then-rename:
/// 1. Write to `{path}.tmp`
/// 2. Rename `{path}.tmp` to `{path}`
#[derive(Debug, Clone)]
pub struct SettingsDocument<F = JsonFormat> {
    path: PathBuf,
    format: F,
}

impl SettingsDocument<JsonFormat> {
    /// Creates a JSON document at the given path.
    #[must_use]
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self::with_format(path, JsonFormat)
    }
}

impl SettingsDocument<TomlFormat> {
    /// Creates a TOML document at the given path.
    #[must_use]
    pub fn toml(path: impl Into<PathBuf>) -> Self {
        Self::with_format(path, TomlFormat)
    }
}

impl<F: DocumentFormat> SettingsDocument<F> {
    /// Creates a document at the given path using `format`.
    #[must_use]
    pub fn with_format(path: impl Into<PathBuf>, format: F) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Returns the path to the document file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the named section as a flat field map.
    #[must_use]
    pub fn load_section(&self, name: &str) -> LoadResult {
        let sections = match self.read_sections() {
            ReadOutcome::Parsed(sections) => sections,
            ReadOutcome::NotFound => return LoadResult::NotFound,
            ReadOutcome::Corrupted(reason) => return LoadResult::Corrupted { reason },
        };

        let Some(section) = sections.get(name) else {
            return LoadResult::MissingSection;
        };

        match self.format.decode_section(section) {
            Ok(fields) => LoadResult::Loaded(fields),
            Err(e) => LoadResult::Corrupted {
                reason: format!("Invalid section '{name}': {e}"),
            },
        }
    }

    /// Replaces the named section with `fields`, keeping all other sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the section cannot be encoded or the file cannot be written.
    pub fn write_section(&self, name: &str, fields: &FieldMap) -> Result<(), DocumentError> {
        self.update_section(name, |_| self.format.encode_section(fields))
    }

    /// Read-modify-write of one section.
    ///
    /// `update` receives the current section, if any, and returns its
    /// replacement. A missing document starts empty. An unreadable or
    /// malformed document is never written over, since its other sections
    /// could not be carried through.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Unreadable`] if the existing document cannot be
    /// read or parsed, or an error if `update`, rendering, or the write fails.
    pub fn update_section<U>(&self, name: &str, update: U) -> Result<(), DocumentError>
    where
        U: FnOnce(Option<&F::Section>) -> Result<F::Section, DocumentError>,
    {
        let mut sections = match self.read_sections() {
            ReadOutcome::Parsed(sections) => sections,
            ReadOutcome::NotFound => SectionList::new(),
            ReadOutcome::Corrupted(reason) => {
                tracing::warn!(
                    "Document {} is unreadable, leaving it untouched: {reason}",
                    self.path.display()
                );
                return Err(DocumentError::Unreadable {
                    path: self.path.clone(),
                    reason,
                });
            }
        };

        let section = update(sections.get(name))?;
        sections.replace_or_append(name, section);

        let content = self.format.render(&sections)?;
        self.write_atomic(&content)
    }

    fn read_sections(&self) -> ReadOutcome<F::Section> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return ReadOutcome::NotFound,
            Err(e) => {
                let error = DocumentError::FileRead {
                    path: self.path.clone(),
                    source: e,
                };
                return ReadOutcome::Corrupted(error.to_string());
            }
        };

        // A blank file is a document with no sections yet.
        if content.trim().is_empty() {
            return ReadOutcome::Parsed(SectionList::new());
        }

        match self.format.parse(&content) {
            Ok(sections) => ReadOutcome::Parsed(sections),
            Err(e) => ReadOutcome::Corrupted(e.to_string()),
        }
    }

    fn write_atomic(&self, content: &str) -> Result<(), DocumentError> {
        let write_error = |source| DocumentError::FileWrite {
            path: self.path.clone(),
            source,
        };

        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(write_error)?;
            }
        }

        // Append .tmp instead of replacing extension to avoid conflicts
        // (e.g., settings.json -> settings.json.tmp, not settings.tmp)
        let temp_path = PathBuf::from(format!("{}.tmp", self.path.display()));

        std::fs::write(&temp_path, content).map_err(write_error)?;

        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            // Best effort: the temp file is useless once the rename failed.
            let _ = std::fs::remove_file(&temp_path);
            return Err(write_error(e));
        }

        Ok(())
    }
}
