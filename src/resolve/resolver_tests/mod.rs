//! Tests for the precedence resolver.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Outcome, OverrideDetection, Persist, PersistStatus, Resolved, Resolver, Source};
use crate::document::{DocumentError, SettingsDocument};
use crate::settings::Settings;
use crate::test_fixtures::{AppSettings, args, registry};

/// Document text used by most scenarios.
const STORED: &str = r#"{"AppSettings":{"Folder":"C:\\Old","Port":8080},"Other":{"X":1}}"#;

/// A temp directory holding `settings.json`.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn with_document(content: &str) -> Self {
        let fixture = Self::new();
        fs::write(fixture.path(), content).unwrap();
        fixture
    }

    fn path(&self) -> PathBuf {
        self.dir.path().join("settings.json")
    }

    fn read(&self) -> String {
        fs::read_to_string(self.path()).unwrap()
    }

    fn resolver(&self) -> Resolver<AppSettings> {
        Resolver::builder(SettingsDocument::json(self.path()), registry())
            .build()
            .unwrap()
    }

    fn resolver_with_defaults(&self, defaults: AppSettings) -> Resolver<AppSettings> {
        Resolver::builder(SettingsDocument::json(self.path()), registry())
            .in_app_defaults(defaults)
            .build()
            .unwrap()
    }

    fn explicit_resolver(&self) -> Resolver<AppSettings> {
        Resolver::builder(SettingsDocument::json(self.path()), registry())
            .override_detection(OverrideDetection::Explicit)
            .build()
            .unwrap()
    }
}

/// Unwraps a resolved outcome.
fn resolved(outcome: Outcome<AppSettings>) -> Resolved<AppSettings> {
    match outcome {
        Outcome::Resolved(resolved) => resolved,
        Outcome::Help(_) => panic!("Expected resolved settings, got help"),
    }
}

/// Resolves `items` with persistence on.
fn run(resolver: &Resolver<AppSettings>, items: &[&str]) -> Resolved<AppSettings> {
    resolved(resolver.resolve(&args(items), Persist::Yes))
}

mod persistence_tests;
