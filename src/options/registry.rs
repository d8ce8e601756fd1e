//! Field name to flag spelling lookup.

use std::collections::HashMap;

/// One registered field with its two flag spellings (stored without dashes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// Schema field name the flags assign to
    pub field: String,
    /// Long spelling, e.g. `port` for `--port`
    pub long: String,
    /// Short spelling, e.g. `p` for `-p`
    pub short: String,
}

/// Maps command-line flag spellings to schema field names.
///
/// Spellings are stored without leading dashes, so `"--port"` and `"port"`
/// register the same flag. Lookups are case-sensitive. Registering a spelling
/// twice is last-write-wins.
///
/// # Example
///
/// ```
/// use layered_settings::options::OptionRegistry;
///
/// let registry: OptionRegistry = [("Port", "--port", "-p")].into_iter().collect();
///
/// assert_eq!(registry.lookup("--port"), Some("Port"));
/// assert_eq!(registry.lookup("p"), Some("Port"));
/// assert_eq!(registry.lookup("--Port"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    entries: Vec<OptionEntry>,
    by_flag: HashMap<String, String>,
}

impl OptionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field under its long and short spellings.
    pub fn register(
        &mut self,
        field: impl Into<String>,
        long: impl AsRef<str>,
        short: impl AsRef<str>,
    ) {
        let entry = OptionEntry {
            field: field.into(),
            long: strip_dashes(long.as_ref()).to_string(),
            short: strip_dashes(short.as_ref()).to_string(),
        };

        for flag in [&entry.long, &entry.short] {
            if flag.is_empty() {
                continue;
            }
            if let Some(previous) = self.by_flag.insert(flag.clone(), entry.field.clone()) {
                if previous != entry.field {
                    tracing::debug!(
                        "Flag '{flag}' re-registered: '{previous}' replaced by '{}'",
                        entry.field
                    );
                }
            }
        }

        self.entries.push(entry);
    }

    /// Returns the field registered for a flag token, dashes optional.
    #[must_use]
    pub fn lookup(&self, flag: &str) -> Option<&str> {
        self.by_flag.get(strip_dashes(flag)).map(String::as_str)
    }

    /// Returns the registered entries in registration order.
    #[must_use]
    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    /// Returns the number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no field is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F, L, S> FromIterator<(F, L, S)> for OptionRegistry
where
    F: Into<String>,
    L: AsRef<str>,
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (F, L, S)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (field, long, short) in iter {
            registry.register(field, long, short);
        }
        registry
    }
}

/// Removes any leading dashes from a flag token.
pub(crate) fn strip_dashes(token: &str) -> &str {
    token.trim_start_matches('-')
}
