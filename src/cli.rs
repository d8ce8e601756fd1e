//! CLI argument parsing using clap.
//!
//! Only the entry point's own options live here. Everything after `--` is
//! handed to the settings engine untouched.

use std::path::PathBuf;

use clap::Parser;

/// Help footer explaining the `--` separator.
const AFTER_HELP: &str = "\
Settings flags go after `--`, for example:
  layered-settings -- --port 9090
  layered-settings -- --help     (list the settings flags)

`-h` before `--` shows this help instead.";

/// Layered Settings: resolve and save application settings (settings flags follow `--`)
///
/// Merges the saved settings document with command-line overrides
/// and prints the result.
#[derive(Debug, Parser)]
#[command(name = "layered-settings")]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Path to the settings document (.json or .toml)
    #[arg(long, short)]
    pub document: Option<PathBuf>,

    /// Resolve without writing the document
    #[arg(long = "no-persist")]
    pub no_persist: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Settings arguments, e.g. `-- --port 9090 --reset`
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    #[cfg(test)]
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
