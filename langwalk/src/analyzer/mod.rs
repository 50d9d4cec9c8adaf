//! Reusable entry point binding a translator, a tag resolver, a default
//! strategy and a depth budget.
//!
//! An `Analyzer` is immutable after construction and holds no per-call
//! state, so one instance can serve concurrent requests. Construct it once
//! per configuration and pass it to call sites instead of reaching for a
//! process-wide singleton.

use std::fmt;
use std::sync::Arc;

use unic_langid::{LanguageIdentifier, langid};

use crate::shape::Localize;
use crate::{
    Batch, Context, DefaultTag, Entry, LocalizeError, Strategy, TagResolver, Translator,
    WalkReport, Walker,
};

/// Locale whose text is the catalogue source; translation is skipped for it.
#[must_use]
pub fn default_origin() -> LanguageIdentifier {
    langid!("zh")
}

/// Localises strings nested inside arbitrary values.
#[derive(Clone)]
pub struct Analyzer {
    translator: Arc<dyn Translator>,
    tags: Arc<dyn TagResolver>,
    strategy: Strategy,
    max_depth: i32,
    origin: LanguageIdentifier,
}

/// Builds an [`Analyzer`].
pub struct AnalyzerBuilder {
    translator: Arc<dyn Translator>,
    tags: Arc<dyn TagResolver>,
    strategy: Strategy,
    max_depth: i32,
    origin: LanguageIdentifier,
}

impl Analyzer {
    /// Starts building an analyzer around `translator`.
    ///
    /// Defaults: [`DefaultTag`] resolution, [`Strategy::Line`] for
    /// top-level values, an unbounded depth budget and [`default_origin`].
    ///
    /// # Examples
    /// ```rust
    /// use langwalk::{Analyzer, CatalogTranslator, Context, langid};
    ///
    /// let translator = CatalogTranslator::builder()
    ///     .with_messages(langid!("en"), [("翻译1", "Translation 1")])
    ///     .build();
    /// let analyzer = Analyzer::builder(translator).max_depth(1).build();
    ///
    /// let cx = Context::from(langid!("en"));
    /// assert_eq!(analyzer.analyze(&cx, vec![String::from("翻译1")]), ["Translation 1"]);
    /// assert_eq!(
    ///     analyzer.analyze(&cx, vec![vec![String::from("翻译1")]]),
    ///     [["翻译1"]],
    /// );
    /// ```
    #[must_use]
    pub fn builder(translator: impl Translator + 'static) -> AnalyzerBuilder {
        AnalyzerBuilder::new(Arc::new(translator))
    }

    /// Analyzer with every default applied.
    #[must_use]
    pub fn new(translator: impl Translator + 'static) -> Self {
        Self::builder(translator).build()
    }

    /// Returns `value` with its reachable strings localised.
    ///
    /// The value is returned untouched when the context targets the origin
    /// locale (an absent or root context locale counts as the origin).
    #[must_use]
    pub fn analyze<T: Localize>(&self, cx: &Context, mut value: T) -> T {
        let _report = self.analyze_in_place(cx, &mut value);
        value
    }

    /// Localises `value` in place and reports what happened.
    pub fn analyze_in_place<T: Localize + ?Sized>(&self, cx: &Context, value: &mut T) -> WalkReport {
        if self.is_origin(cx) {
            tracing::debug!(origin = %self.origin, "origin locale, skipping translation");
            return WalkReport::default();
        }
        let mut root = value;
        Walker::new(cx, self.translator.as_ref(), self.tags.as_ref()).run(
            &mut root,
            Some(&self.strategy),
            self.max_depth,
        )
    }

    /// Translates lines with the bound translator.
    #[must_use]
    pub fn translate(&self, cx: &Context, lines: Vec<String>) -> Batch {
        self.translator.translate(cx, lines)
    }

    /// Translates one line with the bound translator.
    ///
    /// # Errors
    ///
    /// Returns the translator's [`LocalizeError`] when no translation exists.
    pub fn translate_one(&self, cx: &Context, line: &str) -> Result<String, LocalizeError> {
        self.translator.translate_one(cx, line)
    }

    /// Translates lines, keeping originals on failure and skipping lookups
    /// for the origin locale. Errors are discarded.
    #[must_use]
    pub fn translate_lossy<I, S>(&self, cx: &Context, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let owned: Vec<String> = lines.into_iter().map(Into::into).collect();
        if self.is_origin(cx) {
            return owned;
        }
        self.translator.translate(cx, owned).into_lines()
    }

    /// Single-line form of [`Analyzer::translate_lossy`].
    #[must_use]
    pub fn translate_one_lossy(&self, cx: &Context, line: &str) -> String {
        if self.is_origin(cx) {
            return line.to_owned();
        }
        self.translator
            .translate_one(cx, line)
            .unwrap_or_else(|_| line.to_owned())
    }

    /// Applies the analyzer's default strategy to `lines` directly.
    #[must_use]
    pub fn parse(&self, cx: &Context, lines: Vec<String>) -> Batch {
        if self.is_origin(cx) {
            return lines.into_iter().map(Entry::translated).collect();
        }
        self.strategy.apply(cx, self.translator.as_ref(), lines)
    }

    /// Configured depth budget.
    #[must_use]
    pub const fn max_depth(&self) -> i32 {
        self.max_depth
    }

    /// Locale whose text is never translated.
    #[must_use]
    pub const fn origin(&self) -> &LanguageIdentifier {
        &self.origin
    }

    /// Strategy applied to values outside any annotated record field.
    #[must_use]
    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    fn is_origin(&self, cx: &Context) -> bool {
        *cx.locale_or(&self.origin) == self.origin
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("translator", &"<translator>")
            .field("tags", &"<resolver>")
            .field("strategy", &self.strategy)
            .field("max_depth", &self.max_depth)
            .field("origin", &self.origin)
            .finish()
    }
}

impl AnalyzerBuilder {
    /// Creates a builder around a shared translator.
    #[must_use]
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            tags: Arc::new(DefaultTag::new()),
            strategy: Strategy::Line,
            max_depth: i32::MAX,
            origin: default_origin(),
        }
    }

    /// Replaces the tag resolver.
    #[must_use]
    pub fn tag_resolver(mut self, tags: impl TagResolver + 'static) -> Self {
        self.tags = Arc::new(tags);
        self
    }

    /// Replaces the strategy used outside annotated fields.
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Limits how many records, sequences and mappings the walk enters.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the locale whose text is never translated.
    #[must_use]
    pub fn origin(mut self, origin: LanguageIdentifier) -> Self {
        self.origin = origin;
        self
    }

    /// Finishes the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            translator: self.translator,
            tags: self.tags,
            strategy: self.strategy,
            max_depth: self.max_depth,
            origin: self.origin,
        }
    }
}

impl fmt::Debug for AnalyzerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerBuilder")
            .field("strategy", &self.strategy)
            .field("max_depth", &self.max_depth)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
