//! Parse strategies: how a batch of leaf strings reaches the translator.
//!
//! Two strategies ship with the crate. [`Strategy::Line`] looks every string
//! up verbatim. [`Strategy::Template`] falls back to placeholder matching for
//! strings that embed untranslatable tokens. Applications can plug in their
//! own behaviour through [`Strategy::custom`].

use std::fmt;
use std::sync::Arc;

use crate::{Batch, Context, Translator};

mod template;

pub use template::{PLACEHOLDER, TemplateParse};

/// One translation mode applied to a batch of strings.
///
/// Closures with the matching signature implement the trait, so a custom
/// strategy can be a plain function.
pub trait Parse: Send + Sync {
    /// Translates `input` through `translator`, returning one entry per line.
    fn parse(&self, cx: &Context, translator: &dyn Translator, input: Vec<String>) -> Batch;
}

impl<F> Parse for F
where
    F: Fn(&Context, &dyn Translator, Vec<String>) -> Batch + Send + Sync,
{
    fn parse(&self, cx: &Context, translator: &dyn Translator, input: Vec<String>) -> Batch {
        self(cx, translator, input)
    }
}

/// Verbatim full-text lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineParse;

impl Parse for LineParse {
    fn parse(&self, cx: &Context, translator: &dyn Translator, input: Vec<String>) -> Batch {
        translator.translate(cx, input)
    }
}

/// Strategy selected for a subtree of the walked value.
#[derive(Clone, Default)]
pub enum Strategy {
    /// Full-text lookup of each string.
    #[default]
    Line,
    /// Full-text lookup with placeholder matching as a fallback.
    Template,
    /// Application-provided strategy.
    Custom(Arc<dyn Parse>),
}

impl Strategy {
    /// Wraps a custom [`Parse`] implementation.
    ///
    /// # Examples
    /// ```rust
    /// use langwalk::{Batch, Context, Entry, Strategy, Translator};
    ///
    /// let shout = Strategy::custom(|_: &Context, _: &dyn Translator, input: Vec<String>| {
    ///     input
    ///         .into_iter()
    ///         .map(|line| Entry::translated(line.to_uppercase()))
    ///         .collect::<Batch>()
    /// });
    /// assert!(matches!(shout, Strategy::Custom(_)));
    /// ```
    #[must_use]
    pub fn custom(parse: impl Parse + 'static) -> Self {
        Self::Custom(Arc::new(parse))
    }

    /// Applies the strategy to `input`.
    #[must_use]
    pub fn apply(&self, cx: &Context, translator: &dyn Translator, input: Vec<String>) -> Batch {
        match self {
            Self::Line => LineParse.parse(cx, translator, input),
            Self::Template => TemplateParse::han().parse(cx, translator, input),
            Self::Custom(parse) => parse.parse(cx, translator, input),
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => f.write_str("Line"),
            Self::Template => f.write_str("Template"),
            Self::Custom(_) => f.write_str("Custom(<parse>)"),
        }
    }
}
