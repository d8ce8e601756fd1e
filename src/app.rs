//! Application startup and utilities.
//!
//! This module contains the settings schema of the entry point, exit codes
//! and tracing setup.

use std::fmt;

use layered_settings::Settings;
use layered_settings::options::OptionRegistry;
use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0), including `--help`.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - the settings schema is unusable.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Persistence error (exit code 2) - settings resolved but not saved.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn persist_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Settings managed by the `layered-settings` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppSettings {
    /// Working folder
    pub folder: String,
    /// Listening port
    pub port: u16,
    /// Verbose output of the hosted application
    pub verbose: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            folder: "C:\\Default".to_string(),
            port: 9999,
            verbose: false,
        }
    }
}

impl Settings for AppSettings {
    const SECTION: &'static str = "AppSettings";
}

impl fmt::Display for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AppSettings {{ folder: {}, port: {}, verbose: {} }}",
            self.folder, self.port, self.verbose
        )
    }
}

/// Flag spellings for every [`AppSettings`] field.
pub fn registry() -> OptionRegistry {
    [
        ("Folder", "--folder", "-f"),
        ("Port", "--port", "-p"),
        ("Verbose", "--verbose", "-v"),
    ]
    .into_iter()
    .collect()
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_field() {
        let registry = registry();
        let fields = layered_settings::settings::to_fields(&AppSettings::default()).unwrap();

        for name in fields.keys() {
            assert!(
                registry.entries().iter().any(|entry| &entry.field == name),
                "field {name} has no flag"
            );
        }
    }

    #[test]
    fn display_lists_fields() {
        let text = AppSettings::default().to_string();
        assert!(text.contains("port: 9999"));
        assert!(text.contains("C:\\Default"));
    }
}
