//! Results of one resolution pass.

use std::fmt;

use crate::document::DocumentError;
use crate::options::HelpCatalogue;

/// Whether the resolved settings should be written back to the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Persist {
    /// Write the resolved section (unless `--ignore` was given).
    #[default]
    Yes,
    /// Never touch the document.
    No,
}

impl From<bool> for Persist {
    fn from(persist: bool) -> Self {
        if persist { Self::Yes } else { Self::No }
    }
}

/// How command-line values are told apart from untouched fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverrideDetection {
    /// A field counts as given on the command line when its value differs
    /// from a fresh default. A command-line value equal to the default is
    /// therefore indistinguishable from "not given".
    #[default]
    DiffAgainstDefault,
    /// Every recorded command-line assignment is reapplied, whatever its value.
    Explicit,
}

/// Where the baseline values of a resolution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Schema defaults.
    Defaults,
    /// Caller-supplied in-app defaults.
    InAppDefaults,
    /// The persisted document section.
    Document,
    /// `--reset` restored schema defaults.
    Reset,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Defaults => "defaults",
            Self::InAppDefaults => "in-app defaults",
            Self::Document => "document",
            Self::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// What happened to the persisted document.
#[derive(Debug)]
pub enum PersistStatus {
    /// The section was written.
    Written,
    /// Writing was turned off by the caller or by `--ignore`.
    Suppressed,
    /// Writing failed; the resolved settings are still valid.
    Failed(DocumentError),
}

impl PersistStatus {
    /// Returns `true` if the write failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Settings produced by a completed resolution.
#[derive(Debug)]
pub struct Resolved<S> {
    /// The final settings.
    pub settings: S,
    /// Where the baseline came from before command-line overrides.
    pub source: Source,
    /// Outcome of writing the settings back.
    pub persist: PersistStatus,
}

/// Result of [`super::Resolver::resolve`].
#[derive(Debug)]
pub enum Outcome<S> {
    /// `--help` was requested: stop, nothing was resolved or written.
    Help(HelpCatalogue),
    /// Settings were resolved.
    Resolved(Resolved<S>),
}

impl<S> Outcome<S> {
    /// Returns `true` for the help stop signal.
    #[must_use]
    pub const fn is_help(&self) -> bool {
        matches!(self, Self::Help(_))
    }

    /// Returns the resolved settings, or `None` when help was requested.
    #[must_use]
    pub fn into_settings(self) -> Option<S> {
        match self {
            Self::Help(_) => None,
            Self::Resolved(resolved) => Some(resolved.settings),
        }
    }

    /// Returns the resolution details, or `None` when help was requested.
    #[must_use]
    pub fn into_resolved(self) -> Option<Resolved<S>> {
        match self {
            Self::Help(_) => None,
            Self::Resolved(resolved) => Some(resolved),
        }
    }
}
