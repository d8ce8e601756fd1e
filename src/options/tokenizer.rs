//! Argument vector tokenizer.
//!
//! Splits a raw argument vector into control flags and field assignments.
//! The tokenizer never fails: unknown tokens are skipped and a trailing flag
//! without a value is dropped.

use super::registry::{OptionRegistry, strip_dashes};
use super::ControlFlag;

/// A field assignment taken from the command line, value still raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Schema field name
    pub field: String,
    /// Raw value as given on the command line
    pub raw: String,
}

/// Result of tokenizing one argument vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    /// Field assignments in command-line order; later entries win.
    pub assignments: Vec<Assignment>,
    /// `-h` / `--help` was present.
    pub help_requested: bool,
    /// `-r` / `--reset` was present.
    pub reset_requested: bool,
    /// `-i` / `--ignore` was present.
    pub ignore_stored_requested: bool,
}

impl ParsedArguments {
    /// Returns `true` if at least one field assignment was recorded.
    #[must_use]
    pub fn has_assignments(&self) -> bool {
        !self.assignments.is_empty()
    }

    fn set(&mut self, flag: ControlFlag) {
        match flag {
            ControlFlag::Help => self.help_requested = true,
            ControlFlag::Reset => self.reset_requested = true,
            ControlFlag::Ignore => self.ignore_stored_requested = true,
        }
    }

    fn assign(&mut self, field: &str, raw: &str) {
        self.assignments.push(Assignment {
            field: field.to_string(),
            raw: raw.to_string(),
        });
    }
}

/// Tokenizes `args` left to right against `registry`.
///
/// Accepted forms are `--flag value`, `--flag=value`, and the control flags
/// `-h/--help`, `-r/--reset`, `-i/--ignore`, which take no value.
///
/// # Example
///
/// ```
/// use layered_settings::options::{OptionRegistry, tokenize};
///
/// let registry: OptionRegistry = [("Port", "--port", "-p")].into_iter().collect();
/// let parsed = tokenize(&["-i", "--port=9090", "stray"], &registry);
///
/// assert!(parsed.ignore_stored_requested);
/// assert_eq!(parsed.assignments[0].field, "Port");
/// assert_eq!(parsed.assignments[0].raw, "9090");
/// ```
pub fn tokenize<T: AsRef<str>>(args: &[T], registry: &OptionRegistry) -> ParsedArguments {
    let mut parsed = ParsedArguments::default();
    let mut tokens = args.iter().map(AsRef::as_ref);

    while let Some(token) = tokens.next() {
        if let Some(flag) = ControlFlag::from_token(token) {
            parsed.set(flag);
            continue;
        }

        if let Some((name, value)) = token.split_once('=') {
            match registry.lookup(name) {
                Some(field) => parsed.assign(field, value),
                None => tracing::debug!("Ignoring unknown assignment '{token}'"),
            }
            continue;
        }

        if token.starts_with('-') {
            let Some(field) = registry.lookup(strip_dashes(token)) else {
                tracing::debug!("Ignoring unknown flag '{token}'");
                continue;
            };
            match tokens.next() {
                Some(value) => parsed.assign(field, value),
                None => tracing::debug!("Flag '{token}' has no value, dropped"),
            }
            continue;
        }

        tracing::debug!("Ignoring stray argument '{token}'");
    }

    parsed
}
