//! Option catalogue shown for `--help`.

use std::fmt;

use super::ControlFlag;
use super::registry::{OptionEntry, OptionRegistry};

/// Printable listing of the control flags and every registered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCatalogue {
    section: String,
    fields: Vec<OptionEntry>,
}

impl HelpCatalogue {
    /// Builds the catalogue for `section` from `registry`.
    #[must_use]
    pub fn new(section: &str, registry: &OptionRegistry) -> Self {
        Self {
            section: section.to_string(),
            fields: registry.entries().to_vec(),
        }
    }

    /// Returns the field entries listed in the catalogue.
    #[must_use]
    pub fn fields(&self) -> &[OptionEntry] {
        &self.fields
    }
}

impl fmt::Display for HelpCatalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Options for [{}]:", self.section)?;
        writeln!(f)?;
        writeln!(f, "Control flags:")?;
        for flag in ControlFlag::ALL {
            let (short, long) = flag.spellings();
            writeln!(f, "  {short}, {long:<20} {}", flag.description())?;
        }

        if self.fields.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Fields (--flag value or --flag=value):")?;
        for entry in &self.fields {
            let long = format!("--{}", entry.long);
            if entry.short.is_empty() {
                writeln!(f, "      {long:<20} {}", entry.field)?;
            } else {
                writeln!(f, "  -{}, {long:<20} {}", entry.short, entry.field)?;
            }
        }
        Ok(())
    }
}
