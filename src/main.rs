//! Layered Settings
//!
//! Entry point for the layered-settings application.

use std::process::ExitCode;

use layered_settings::document::{DocumentFormat, SettingsDocument};
use layered_settings::{Outcome, Persist, Resolver, Settings, defaults};

mod app;
mod cli;

use app::{AppSettings, exit_code, registry, setup_tracing};
use cli::Cli;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let path = cli.document.unwrap_or_else(defaults::document_path);
    let persist = Persist::from(!cli.no_persist);

    if defaults::is_toml(&path) {
        resolve(SettingsDocument::toml(path), &cli.args, persist)
    } else {
        resolve(SettingsDocument::json(path), &cli.args, persist)
    }
}

/// Resolves [`AppSettings`] against `document` and prints the outcome.
fn resolve<F: DocumentFormat>(
    document: SettingsDocument<F>,
    args: &[String],
    persist: Persist,
) -> ExitCode {
    let resolver = match Resolver::<AppSettings, F>::builder(document, registry()).build() {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };
    tracing::debug!(
        "Resolving [{}] from {} with {} flags",
        AppSettings::SECTION,
        resolver.document().path().display(),
        resolver.registry().len()
    );

    match resolver.resolve(args, persist) {
        Outcome::Help(catalogue) => {
            print!("{catalogue}");
            exit_code::SUCCESS
        }
        Outcome::Resolved(resolved) => {
            tracing::debug!("Baseline taken from {}", resolved.source);
            println!("{}", resolved.settings);

            if resolved.persist.is_failed() {
                exit_code::persist_error()
            } else {
                exit_code::SUCCESS
            }
        }
    }
}
