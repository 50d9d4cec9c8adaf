//! Convenience constructors for the error enums.

use std::sync::Arc;

use unic_langid::LanguageIdentifier;

use super::{LocalizeError, TagError};

impl LocalizeError {
    /// Builds a [`LocalizeError::MissingMessage`] for `id` in `locale`.
    #[must_use]
    pub fn missing(id: impl Into<String>, locale: LanguageIdentifier) -> Self {
        Self::MissingMessage {
            id: id.into(),
            locale,
        }
    }

    /// Wraps an arbitrary backend error.
    ///
    /// # Examples
    /// ```rust
    /// use langwalk::LocalizeError;
    ///
    /// let err = LocalizeError::backend(std::io::Error::other("offline"));
    /// assert!(err.to_string().contains("offline"));
    /// ```
    #[must_use]
    pub fn backend<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Arc::new(source))
    }
}

impl TagError {
    /// Builds a [`TagError::InvalidMode`] for the raw annotation text.
    #[must_use]
    pub fn invalid_mode(annotation: impl Into<String>) -> Self {
        Self::InvalidMode {
            annotation: annotation.into(),
        }
    }
}

impl From<figment::Error> for super::ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Gathering(Box::new(value))
    }
}
