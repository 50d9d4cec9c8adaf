//! Request-scoped locale carried into every translation call.
//!
//! `Context` replaces an ambient request context: callers build one per
//! request (or reuse one per locale) and pass it by reference through the
//! analyzer, the strategies and the translator.

use unic_langid::LanguageIdentifier;

/// Read-only request state visible to translators and strategies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    locale: Option<LanguageIdentifier>,
}

impl Context {
    /// Creates a context without a target locale.
    #[must_use]
    pub const fn new() -> Self {
        Self { locale: None }
    }

    /// Returns a copy of this context targeting `locale`.
    ///
    /// # Examples
    /// ```rust
    /// use langwalk::{Context, langid};
    ///
    /// let cx = Context::new().with_locale(langid!("en"));
    /// assert_eq!(cx.locale(), Some(&langid!("en")));
    /// ```
    #[must_use]
    pub fn with_locale(mut self, locale: LanguageIdentifier) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Target locale stored in the context, if any.
    #[must_use]
    pub const fn locale(&self) -> Option<&LanguageIdentifier> {
        self.locale.as_ref()
    }

    /// Target locale, or `default` when the slot is empty or holds the root
    /// (`und`) locale.
    ///
    /// # Examples
    /// ```rust
    /// use langwalk::{Context, LanguageIdentifier, langid};
    ///
    /// let root = Context::new().with_locale(LanguageIdentifier::default());
    /// assert_eq!(root.locale_or(&langid!("zh")), &langid!("zh"));
    /// ```
    #[must_use]
    pub fn locale_or<'a>(&'a self, default: &'a LanguageIdentifier) -> &'a LanguageIdentifier {
        match self.locale.as_ref() {
            Some(locale) if !is_root(locale) => locale,
            _ => default,
        }
    }
}

impl From<LanguageIdentifier> for Context {
    fn from(locale: LanguageIdentifier) -> Self {
        Self::new().with_locale(locale)
    }
}

fn is_root(locale: &LanguageIdentifier) -> bool {
    *locale == LanguageIdentifier::default()
}
