//! Precedence resolution of one settings section.
//!
//! This module provides:
//! - The resolver and its builder ([`Resolver`], [`ResolverBuilder`])
//! - The result types ([`Outcome`], [`Resolved`], [`Source`], [`PersistStatus`])
//! - Caller switches ([`Persist`], [`OverrideDetection`])
//!
//! # Flow
//!
//! ```text
//! START ──help──▶ HELP (stop, nothing written)
//!   │────reset──▶ RESET (schema defaults, written)
//!   ▼
//! RESOLVE ──▶ APPLY_OVERRIDES ──▶ PERSIST
//! ```
//!
//! `RESOLVE` picks the baseline: `--ignore` uses the defaults; otherwise the
//! document section is read when the vector is empty or carried at least one
//! recognized assignment. A non-empty vector with no assignment skips the
//! document and starts from the defaults.
//!
//! # Known Limitation
//!
//! With [`OverrideDetection::DiffAgainstDefault`] a command-line value equal
//! to the schema default cannot override a different stored value. Use
//! [`OverrideDetection::Explicit`] to reapply every recorded assignment.

mod outcome;
mod resolver;

#[cfg(test)]
mod resolver_tests;

pub use outcome::{Outcome, OverrideDetection, Persist, PersistStatus, Resolved, Source};
pub use resolver::{Resolver, ResolverBuilder};
