//! Test helpers shared across crates in the workspace.
//!
//! Provides scripted translators that record every lookup, plus small
//! constructors for request contexts.

use langwalk::{Context, LanguageIdentifier};

pub mod translators;

/// Context targeting `locale`.
///
/// # Panics
///
/// Panics when `locale` is not a valid language identifier.
#[must_use]
pub fn cx(locale: &str) -> Context {
    #[expect(clippy::expect_used, reason = "test helper input is a literal")]
    let parsed: LanguageIdentifier = locale.parse().expect("valid locale literal");
    Context::from(parsed)
}
