//! Shared test fixtures: a small settings schema and its option registry.

use serde::{Deserialize, Serialize};

use crate::options::OptionRegistry;
use crate::settings::Settings;

/// Schema used across the engine tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppSettings {
    pub folder: String,
    pub port: u16,
    pub verbose: bool,
    pub ratio: f64,
    pub tag: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            folder: "C:\\Default".to_string(),
            port: 9999,
            verbose: false,
            ratio: 1.5,
            tag: None,
        }
    }
}

impl Settings for AppSettings {
    const SECTION: &'static str = "AppSettings";
}

/// Registry covering every [`AppSettings`] field.
pub fn registry() -> OptionRegistry {
    [
        ("Folder", "--folder", "-f"),
        ("Port", "--port", "-p"),
        ("Verbose", "--verbose", "-v"),
        ("Ratio", "--ratio", "-q"),
        ("Tag", "--tag", "-t"),
    ]
    .into_iter()
    .collect()
}

/// Builds an owned argument vector.
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
