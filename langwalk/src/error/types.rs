//! Error enums for annotation parsing, lookups, catalogues and configuration.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// Outcome of resolving a field annotation that does not yield a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TagError {
    /// The field carries the block marker and opts out of translation.
    #[error("tag mod block")]
    Block,

    /// The annotation names no mode, or one this resolver does not know.
    #[error("tag mod invalid in annotation '{annotation}'")]
    InvalidMode {
        /// Raw annotation text attached to the field.
        annotation: String,
    },
}

impl TagError {
    /// Returns `true` for the deliberate block marker.
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Self::Block)
    }
}

/// Failure to translate a single string.
///
/// Callers never lose text on these errors: translators hand back the
/// original input alongside the error.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum LocalizeError {
    /// No catalogue entry exists for the message in the target locale.
    #[error("message '{id}' not found for locale {locale}")]
    MissingMessage {
        /// Full-text message identifier that was looked up.
        id: String,
        /// Locale the lookup targeted.
        locale: LanguageIdentifier,
    },

    /// Error raised by a translation backend.
    #[error("translation backend failed: {0}")]
    Backend(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

/// Errors surfaced while building or loading a message catalogue.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Reading a catalogue file failed.
    #[error("failed to read catalogue '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON catalogue did not contain a flat object of strings.
    #[cfg(feature = "serde_json")]
    #[error("invalid JSON catalogue for {locale}: {source}")]
    Json {
        /// Locale the catalogue was registered for.
        locale: LanguageIdentifier,
        /// Parser error reported by `serde_json`.
        #[source]
        source: serde_json::Error,
    },

    /// A TOML catalogue did not contain a flat table of strings.
    #[cfg(feature = "toml")]
    #[error("invalid TOML catalogue for {locale}: {source}")]
    Toml {
        /// Locale the catalogue was registered for.
        locale: LanguageIdentifier,
        /// Parser error reported by `toml`.
        #[source]
        source: toml::de::Error,
    },

    /// The file extension does not map to an enabled catalogue format.
    #[error("unsupported catalogue format for '{path}'")]
    UnsupportedFormat {
        /// File whose extension was not recognised.
        path: Utf8PathBuf,
    },

    /// A catalogue file name is not a valid locale identifier.
    #[error("catalogue '{path}' is not named after a locale: {source}")]
    InvalidLocale {
        /// File whose stem failed to parse.
        path: Utf8PathBuf,
        /// Parser error reported by `unic-langid`.
        #[source]
        source: LanguageIdentifierError,
    },
}

/// Errors surfaced while loading analyzer configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Figment could not gather or extract the configuration.
    #[error("failed to gather analyzer configuration: {0}")]
    Gathering(#[from] Box<figment::Error>),

    /// A locale string in the configuration does not parse.
    #[error("invalid locale '{value}' in configuration: {source}")]
    InvalidLocale {
        /// Offending locale text.
        value: String,
        /// Parser error reported by `unic-langid`.
        #[source]
        source: LanguageIdentifierError,
    },

    /// The configured local scripts do not form a valid token pattern.
    #[error("invalid local scripts {scripts:?}: {source}")]
    InvalidScripts {
        /// Script names as configured.
        scripts: Vec<String>,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A configured catalogue failed to load.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
