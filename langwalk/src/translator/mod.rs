//! Translation capability consumed by the strategies and the analyzer.
//!
//! `Translator` abstracts full-text message lookup so the walker can stay
//! agnostic of any concrete backend. Implementations only need to provide
//! [`Translator::translate_one`]; batch lookups, pass-through of originals on
//! failure and last-error reporting come from the provided methods.

use std::sync::Arc;

use unic_langid::LanguageIdentifier;

use crate::{Context, LocalizeError};

mod batch;
mod catalog;

pub use batch::{Batch, Entry};
pub use catalog::{CatalogFormat, CatalogTranslator, CatalogTranslatorBuilder};

/// Looks up translations of full-text messages for the context locale.
///
/// The trait is object-safe so analyzers can hold it behind
/// `Arc<dyn Translator>`. Implementations must be safe to call from several
/// threads at once.
pub trait Translator: Send + Sync {
    /// Translates a single message, returning an error when no translation
    /// exists. Callers treat an error as "keep the original text".
    ///
    /// # Errors
    ///
    /// Returns a [`LocalizeError`] when the message cannot be resolved.
    fn translate_one(&self, cx: &Context, line: &str) -> Result<String, LocalizeError>;

    /// Translates every line, keeping the original text for lines that fail.
    ///
    /// # Examples
    /// ```rust
    /// use langwalk::{CatalogTranslator, Context, Translator, langid};
    ///
    /// let translator = CatalogTranslator::builder()
    ///     .with_messages(langid!("en"), [("翻译1", "Translation 1")])
    ///     .build();
    /// let cx = Context::from(langid!("en"));
    /// let batch = translator.translate(&cx, vec!["翻译1".into(), "翻译2".into()]);
    /// assert_eq!(batch.lines(), ["Translation 1", "翻译2"]);
    /// assert!(batch.last_error().is_some());
    /// ```
    fn translate(&self, cx: &Context, lines: Vec<String>) -> Batch {
        lines
            .into_iter()
            .map(|line| match self.translate_one(cx, &line) {
                Ok(text) => Entry::translated(text),
                Err(err) => Entry::fallback(line, err),
            })
            .collect()
    }

    /// Wraps the translator so lookups are skipped for the given locales.
    #[must_use]
    fn filter<I>(self, locales: I) -> Filtered<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = LanguageIdentifier>,
    {
        Filtered {
            inner: self,
            locales: locales.into_iter().collect(),
        }
    }
}

/// Translator variant that passes input through unchanged when the context
/// locale is one of the filtered locales.
#[derive(Debug, Clone)]
pub struct Filtered<T> {
    inner: T,
    locales: Vec<LanguageIdentifier>,
}

impl<T> Filtered<T> {
    /// Locales that bypass the wrapped translator.
    #[must_use]
    pub fn locales(&self) -> &[LanguageIdentifier] {
        &self.locales
    }

    fn is_filtered(&self, cx: &Context) -> bool {
        cx.locale()
            .is_some_and(|locale| self.locales.contains(locale))
    }
}

impl<T: Translator> Translator for Filtered<T> {
    fn translate_one(&self, cx: &Context, line: &str) -> Result<String, LocalizeError> {
        if self.is_filtered(cx) {
            return Ok(line.to_owned());
        }
        self.inner.translate_one(cx, line)
    }

    fn translate(&self, cx: &Context, lines: Vec<String>) -> Batch {
        if self.is_filtered(cx) {
            return lines.into_iter().map(Entry::translated).collect();
        }
        self.inner.translate(cx, lines)
    }
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate_one(&self, cx: &Context, line: &str) -> Result<String, LocalizeError> {
        (**self).translate_one(cx, line)
    }

    fn translate(&self, cx: &Context, lines: Vec<String>) -> Batch {
        (**self).translate(cx, lines)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate_one(&self, cx: &Context, line: &str) -> Result<String, LocalizeError> {
        (**self).translate_one(cx, line)
    }

    fn translate(&self, cx: &Context, lines: Vec<String>) -> Batch {
        (**self).translate(cx, lines)
    }
}

impl<T: Translator + ?Sized> Translator for Arc<T> {
    fn translate_one(&self, cx: &Context, line: &str) -> Result<String, LocalizeError> {
        (**self).translate_one(cx, line)
    }

    fn translate(&self, cx: &Context, lines: Vec<String>) -> Batch {
        (**self).translate(cx, lines)
    }
}

/// Translator that declines every lookup.
///
/// Useful as a default when no catalogue is configured: every string keeps its
/// original text and the batch reports a missing message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpTranslator;

impl NoOpTranslator {
    /// Creates a new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Translator for NoOpTranslator {
    fn translate_one(&self, cx: &Context, line: &str) -> Result<String, LocalizeError> {
        let locale = cx.locale().cloned().unwrap_or_default();
        Err(LocalizeError::missing(line, locale))
    }
}
