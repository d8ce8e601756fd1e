//! Default values for the engine and its entry point.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

use std::path::{Path, PathBuf};

/// File name of the settings document.
pub const DOCUMENT_FILE_NAME: &str = "settings.json";

/// Directory under the per-user config directory holding the document.
pub const APP_DIR_NAME: &str = "layered-settings";

/// Default document path: `<config dir>/layered-settings/settings.json`,
/// or `settings.json` in the working directory when there is no config dir.
#[must_use]
pub fn document_path() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(DOCUMENT_FILE_NAME),
        |dir| dir.join(APP_DIR_NAME).join(DOCUMENT_FILE_NAME),
    )
}

/// Returns `true` if the path names a TOML document.
#[must_use]
pub fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_path_ends_with_file_name() {
        assert!(document_path().ends_with(DOCUMENT_FILE_NAME));
    }

    #[test]
    fn toml_detection_uses_extension() {
        assert!(is_toml(Path::new("a/settings.toml")));
        assert!(is_toml(Path::new("SETTINGS.TOML")));
        assert!(!is_toml(Path::new("settings.json")));
        assert!(!is_toml(Path::new("toml")));
    }
}
