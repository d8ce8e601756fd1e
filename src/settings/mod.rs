//! Settings schema capability.
//!
//! A settings type is any serde-serializable struct with a default value and
//! a section name. The resolver never looks at concrete fields: it works on
//! the flat [`FieldMap`] view produced by [`to_fields`], which is also the
//! shape stored in the persisted document.

mod error;
mod fields;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use error::FieldError;
pub use fields::{FieldMap, bind, coerce, from_fields, overlay, to_fields};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A settings schema resolved by the engine.
///
/// Implementors declare the section their fields live under in the persisted
/// document. Field names are the serde names of the struct's fields, so
/// `#[serde(rename_all = "PascalCase")]` and friends apply to both the
/// document and the option registry.
///
/// # Example
///
/// ```
/// use layered_settings::settings::Settings;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// #[serde(rename_all = "PascalCase")]
/// struct AppSettings {
///     folder: String,
///     port: u16,
/// }
///
/// impl Default for AppSettings {
///     fn default() -> Self {
///         Self { folder: "C:\\Default".to_string(), port: 9999 }
///     }
/// }
///
/// impl Settings for AppSettings {
///     const SECTION: &'static str = "AppSettings";
/// }
///
/// assert_eq!(AppSettings::defaults().port, 9999);
/// ```
pub trait Settings: Serialize + DeserializeOwned + Default + Clone {
    /// Name of the document section holding this schema's fields.
    const SECTION: &'static str;

    /// Returns the schema defaults.
    #[must_use]
    fn defaults() -> Self {
        Self::default()
    }
}
