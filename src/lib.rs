//! Layered Settings
//!
//! Resolves one settings section from schema defaults, a persisted document
//! and a command-line argument vector, then writes the result back without
//! disturbing the document's other sections.

pub mod defaults;
pub mod document;
pub mod options;
pub mod resolve;
pub mod settings;

#[cfg(test)]
mod test_fixtures;

pub use resolve::{Outcome, Persist, Resolver};
pub use settings::Settings;
