//! Command-line surface of the engine.
//!
//! This module provides:
//! - Flag spelling lookup ([`OptionRegistry`])
//! - Argument vector tokenizing ([`tokenize`], [`ParsedArguments`])
//! - The `--help` listing ([`HelpCatalogue`])
//!
//! # Control Flags
//!
//! Three flags change how resolution runs instead of setting a field.
//! They must match exactly and never consume a value:
//!
//! | Flag | Effect |
//! |------|--------|
//! | `-h`, `--help` | Print the catalogue and stop |
//! | `-r`, `--reset` | Restore schema defaults and persist them |
//! | `-i`, `--ignore` | Do not read or write the persisted document |

mod help;
mod registry;
mod tokenizer;

#[cfg(test)]
mod registry_tests;

pub use help::HelpCatalogue;
pub use registry::{OptionEntry, OptionRegistry};
pub use tokenizer::{Assignment, ParsedArguments, tokenize};

/// A flag that steers resolution rather than assigning a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    /// `-h` / `--help`
    Help,
    /// `-r` / `--reset`
    Reset,
    /// `-i` / `--ignore`
    Ignore,
}

impl ControlFlag {
    /// All control flags in catalogue order.
    pub const ALL: [Self; 3] = [Self::Help, Self::Reset, Self::Ignore];

    /// Returns the `(short, long)` spellings.
    #[must_use]
    pub const fn spellings(self) -> (&'static str, &'static str) {
        match self {
            Self::Help => ("-h", "--help"),
            Self::Reset => ("-r", "--reset"),
            Self::Ignore => ("-i", "--ignore"),
        }
    }

    /// Returns a one-line description for the help catalogue.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Help => "Show this list and stop",
            Self::Reset => "Restore defaults and save them",
            Self::Ignore => "Ignore saved settings and do not save",
        }
    }

    /// Matches a token exactly against the control flag spellings.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| {
            let (short, long) = flag.spellings();
            token == short || token == long
        })
    }
}
