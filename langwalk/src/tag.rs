//! Field annotations and the resolver that turns them into strategies.
//!
//! An annotation is the raw text attached to a record field: either the
//! block marker `-` or comma-separated `key=value` pairs such as
//! `mod=template`. Resolution is a pure function of that text, so every
//! field starts from a clean state and the strategy inherited from a parent
//! travels down the walk as an explicit parameter instead.

use crate::{Strategy, TagError};

/// Annotation opting a field and its whole subtree out of translation.
pub const BLOCK: &str = "-";

/// Translation mode named by an annotation's `mod` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Full-text lookup.
    Line,
    /// Full-text lookup with template fallback.
    Template,
}

impl Mode {
    /// Annotation value for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Template => "template",
        }
    }

    /// Built-in strategy implementing the mode.
    #[must_use]
    pub const fn strategy(self) -> Strategy {
        match self {
            Self::Line => Strategy::Line,
            Self::Template => Strategy::Template,
        }
    }
}

/// Parsed form of a field annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// No annotation: inherit the parent's strategy.
    Inherit,
    /// The block marker.
    Block,
    /// An explicit mode.
    Mode(Mode),
}

impl Annotation {
    /// Parses raw annotation text.
    ///
    /// Pairs are separated by `,` and trimmed; only the `mod` key is
    /// recognised and other keys are ignored. A later `mod` overrides an
    /// earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidMode`] when no `mod` key is present or its
    /// value is not `line` or `template`.
    ///
    /// # Examples
    /// ```rust
    /// use langwalk::{Annotation, Mode, TagError};
    ///
    /// assert_eq!(Annotation::parse(""), Ok(Annotation::Inherit));
    /// assert_eq!(Annotation::parse("-"), Ok(Annotation::Block));
    /// assert_eq!(
    ///     Annotation::parse("mod=template"),
    ///     Ok(Annotation::Mode(Mode::Template))
    /// );
    /// assert!(matches!(
    ///     Annotation::parse("mod=word"),
    ///     Err(TagError::InvalidMode { .. })
    /// ));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, TagError> {
        if raw.is_empty() {
            return Ok(Self::Inherit);
        }
        if raw == BLOCK {
            return Ok(Self::Block);
        }
        let mode = raw
            .split(',')
            .filter_map(|pair| pair.trim().split_once('='))
            .filter(|(key, _)| key.trim() == "mod")
            .map(|(_, value)| value.trim())
            .next_back();
        match mode {
            Some("line") => Ok(Self::Mode(Mode::Line)),
            Some("template") => Ok(Self::Mode(Mode::Template)),
            _ => Err(TagError::invalid_mode(raw)),
        }
    }
}

/// Decides the strategy for a record field from its annotation.
///
/// * `Ok(None)`: inherit the strategy already in effect.
/// * `Ok(Some(strategy))`: use `strategy` for the field's subtree.
/// * `Err(TagError::Block)`: skip the field entirely.
/// * any other error: skip the field, treating it as not translatable.
pub trait TagResolver: Send + Sync {
    /// Resolves one field annotation.
    ///
    /// # Errors
    ///
    /// Returns [`TagError`] when the field must not be descended into.
    fn resolve(&self, annotation: &str) -> Result<Option<Strategy>, TagError>;
}

/// Resolver understanding the `-` marker and the `mod` key.
///
/// `mod=template` resolves to the resolver's template strategy, which is
/// [`Strategy::Template`] unless replaced with [`DefaultTag::with_template`].
#[derive(Debug, Default, Clone)]
pub struct DefaultTag {
    template: Strategy,
}

impl DefaultTag {
    /// Creates a resolver using the built-in Han template matching.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            template: Strategy::Template,
        }
    }

    /// Creates a resolver that answers `mod=template` with `template`.
    ///
    /// # Examples
    /// ```rust
    /// use langwalk::{DefaultTag, Strategy, TagResolver, TemplateParse};
    ///
    /// let japanese = TemplateParse::for_scripts(["Han", "Hiragana", "Katakana"])
    ///     .expect("known scripts");
    /// let tags = DefaultTag::with_template(Strategy::custom(japanese));
    /// assert!(matches!(tags.resolve("mod=template"), Ok(Some(Strategy::Custom(_)))));
    /// assert!(matches!(tags.resolve("mod=line"), Ok(Some(Strategy::Line))));
    /// ```
    #[must_use]
    pub const fn with_template(template: Strategy) -> Self {
        Self { template }
    }
}

impl TagResolver for DefaultTag {
    fn resolve(&self, annotation: &str) -> Result<Option<Strategy>, TagError> {
        match Annotation::parse(annotation)? {
            Annotation::Inherit => Ok(None),
            Annotation::Block => Err(TagError::Block),
            Annotation::Mode(Mode::Template) => Ok(Some(self.template.clone())),
            Annotation::Mode(Mode::Line) => Ok(Some(Strategy::Line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("", Ok(Annotation::Inherit))]
    #[case::block("-", Ok(Annotation::Block))]
    #[case::line("mod=line", Ok(Annotation::Mode(Mode::Line)))]
    #[case::template("mod=template", Ok(Annotation::Mode(Mode::Template)))]
    #[case::padded(" mod = template ", Ok(Annotation::Mode(Mode::Template)))]
    #[case::extra_keys("scope=ui, mod=line", Ok(Annotation::Mode(Mode::Line)))]
    #[case::last_mode_wins("mod=line,mod=template", Ok(Annotation::Mode(Mode::Template)))]
    #[case::bare_word("line", Err(TagError::invalid_mode("line")))]
    #[case::unknown_mode("mod=word", Err(TagError::invalid_mode("mod=word")))]
    #[case::missing_mod("scope=ui", Err(TagError::invalid_mode("scope=ui")))]
    #[case::block_in_pairs("-,mod=line", Ok(Annotation::Mode(Mode::Line)))]
    fn parses_annotations(#[case] raw: &str, #[case] expected: Result<Annotation, TagError>) {
        assert_eq!(Annotation::parse(raw), expected);
    }

    #[rstest]
    fn resolutions_do_not_leak_between_calls() {
        let resolver = DefaultTag::new();
        assert!(matches!(
            resolver.resolve("mod=template"),
            Ok(Some(Strategy::Template))
        ));
        // A previous `mod` must not satisfy a later annotation without one.
        assert!(matches!(
            resolver.resolve("scope=ui"),
            Err(TagError::InvalidMode { .. })
        ));
        assert!(matches!(resolver.resolve(""), Ok(None)));
    }

    #[rstest]
    fn template_mode_uses_configured_strategy() {
        let tags = DefaultTag::with_template(Strategy::custom(crate::LineParse));
        assert!(matches!(
            tags.resolve("mod=template"),
            Ok(Some(Strategy::Custom(_)))
        ));
        assert!(matches!(tags.resolve("mod=line"), Ok(Some(Strategy::Line))));
        assert!(matches!(
            DefaultTag::new().resolve("mod=template"),
            Ok(Some(Strategy::Template))
        ));
    }

    #[rstest]
    fn block_marker_resolves_to_block_error() {
        assert_eq!(
            DefaultTag::new().resolve(BLOCK).map(|_| ()),
            Err(TagError::Block)
        );
    }
}
