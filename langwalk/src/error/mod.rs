//! Error types produced by annotation parsing, translation and loading.

mod constructors;
mod types;

pub use types::{CatalogError, ConfigError, LocalizeError, TagError};

#[cfg(test)]
mod tests;
