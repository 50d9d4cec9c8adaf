//! Recursive traversal rewriting leaf strings in place.
//!
//! The walker threads two values down the recursion: the strategy in effect
//! (inherited from the nearest annotated ancestor) and the remaining depth
//! budget. Records, sequences and mappings each cost one unit of budget;
//! references are free. A child is only visited while the budget is
//! non-negative, which also bounds recursion on pathologically deep values.

use crate::shape::{Elements, FieldMut, Localize, Record, Shape};
use crate::{Context, Entry, LocalizeError, Strategy, TagResolver, Translator};

/// Summary of one walk.
#[derive(Debug, Clone, Default)]
pub struct WalkReport {
    /// Leaf strings rewritten by a strategy.
    pub translated: usize,
    /// Leaf strings left unchanged because the lookup failed.
    pub failed: usize,
    /// Most recent lookup failure, if any.
    pub last_error: Option<LocalizeError>,
}

impl WalkReport {
    /// Returns `true` when no lookup failed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0
    }

    fn record_failure(&mut self, error: LocalizeError) {
        self.failed += 1;
        self.last_error = Some(error);
    }
}

/// Walks one value with a fixed translator and tag resolver.
///
/// # Examples
/// ```rust
/// use langwalk::{CatalogTranslator, Context, DefaultTag, Strategy, Walker, langid};
///
/// let translator = CatalogTranslator::builder()
///     .with_messages(langid!("en"), [("翻译1", "Translation 1")])
///     .build();
/// let cx = Context::from(langid!("en"));
/// let mut value = vec![vec![String::from("翻译1")]];
///
/// let report = Walker::new(&cx, &translator, &DefaultTag::new()).run(
///     &mut value,
///     Some(&Strategy::Line),
///     1,
/// );
/// assert_eq!(value[0][0], "翻译1");
/// assert_eq!(report.translated, 0);
/// ```
pub struct Walker<'w> {
    cx: &'w Context,
    translator: &'w dyn Translator,
    tags: &'w dyn TagResolver,
    report: WalkReport,
}

impl<'w> Walker<'w> {
    /// Creates a walker bound to a context, translator and tag resolver.
    #[must_use]
    pub fn new(
        cx: &'w Context,
        translator: &'w dyn Translator,
        tags: &'w dyn TagResolver,
    ) -> Self {
        Self {
            cx,
            translator,
            tags,
            report: WalkReport::default(),
        }
    }

    /// Walks `value` with `strategy` in effect and `depth` units of budget.
    ///
    /// A negative budget leaves structured values untouched, while a
    /// top-level string is still translated.
    pub fn run(
        mut self,
        value: &mut dyn Localize,
        strategy: Option<&Strategy>,
        depth: i32,
    ) -> WalkReport {
        self.walk(value, strategy, depth);
        self.report
    }

    fn walk(&mut self, value: &mut dyn Localize, strategy: Option<&Strategy>, depth: i32) {
        match value.shape() {
            Shape::Text(text) => self.text(text, strategy),
            Shape::Reference(Some(inner)) => self.walk(inner, strategy, depth),
            Shape::Reference(None) | Shape::Opaque => {}
            Shape::Record(record) => self.record(record, strategy, depth),
            Shape::Sequence(elements) | Shape::Mapping(elements) => {
                self.elements(elements, strategy, depth);
            }
        }
    }

    fn descend(&mut self, child: &mut dyn Localize, strategy: Option<&Strategy>, depth: i32) {
        if depth < 0 {
            tracing::trace!("depth budget exhausted");
            return;
        }
        self.walk(child, strategy, depth);
    }

    fn record(&mut self, record: &mut dyn Record, inherited: Option<&Strategy>, depth: i32) {
        if depth < 0 {
            return;
        }
        let next = depth - 1;
        record.for_each_field(&mut |field: FieldMut<'_>| {
            match self.tags.resolve(field.annotation) {
                Ok(None) => self.descend(field.value, inherited, next),
                Ok(Some(strategy)) => self.descend(field.value, Some(&strategy), next),
                Err(err) if err.is_block() => {
                    tracing::trace!(field = field.name, "field blocked from translation");
                }
                Err(err) => {
                    tracing::debug!(
                        field = field.name,
                        annotation = field.annotation,
                        error = %err,
                        "skipping field with invalid annotation"
                    );
                }
            }
        });
    }

    fn elements(&mut self, elements: &mut dyn Elements, strategy: Option<&Strategy>, depth: i32) {
        if depth < 0 {
            return;
        }
        let next = depth - 1;
        elements.for_each_element(&mut |element: &mut dyn Localize| {
            self.descend(element, strategy, next);
        });
    }

    fn text(&mut self, text: &mut String, active: Option<&Strategy>) {
        let Some(strategy) = active else {
            return;
        };
        let batch = strategy.apply(self.cx, self.translator, vec![text.clone()]);
        match batch.into_entries().into_iter().next() {
            Some(Entry {
                text: translated,
                error: None,
            }) => {
                *text = translated;
                self.report.translated += 1;
            }
            Some(Entry {
                error: Some(err), ..
            }) => self.report.record_failure(err),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatalogTranslator, DefaultTag};
    use rstest::{fixture, rstest};
    use std::collections::HashMap;
    use unic_langid::langid;

    #[fixture]
    fn translator() -> CatalogTranslator {
        CatalogTranslator::builder()
            .with_messages(langid!("en"), [("翻译1", "Translation 1")])
            .build()
    }

    fn run(value: &mut dyn Localize, strategy: Option<&Strategy>, depth: i32) -> WalkReport {
        let cx = Context::from(langid!("en"));
        Walker::new(&cx, &translator(), &DefaultTag::new()).run(value, strategy, depth)
    }

    #[rstest]
    fn translates_top_level_string_even_with_negative_budget() {
        let mut value = String::from("翻译1");
        let report = run(&mut value, Some(&Strategy::Line), -1);
        assert_eq!(value, "Translation 1");
        assert_eq!(report.translated, 1);
    }

    #[rstest]
    fn negative_budget_leaves_structures_untouched() {
        let mut value = vec![String::from("翻译1")];
        run(&mut value, Some(&Strategy::Line), -1);
        assert_eq!(value, ["翻译1"]);
    }

    #[cfg(feature = "serde_json")]
    #[rstest]
    #[case::zero(0)]
    #[case::one(1)]
    #[case::three(3)]
    fn budget_boundary_for_nested_sequences(#[case] depth: i32) {
        fn nest(levels: i32) -> serde_json::Value {
            (0..levels).fold(serde_json::json!("翻译1"), |inner, _| {
                serde_json::Value::Array(vec![inner])
            })
        }
        fn leaf(value: &serde_json::Value) -> &str {
            match value {
                serde_json::Value::Array(items) => items.first().map_or("", leaf),
                serde_json::Value::String(text) => text,
                _ => "",
            }
        }

        let mut within = nest(depth);
        run(&mut within, Some(&Strategy::Line), depth);
        let mut beyond = nest(depth + 1);
        run(&mut beyond, Some(&Strategy::Line), depth);

        assert_eq!(leaf(&within), "Translation 1", "{depth} levels fit the budget");
        assert_eq!(leaf(&beyond), "翻译1", "{} levels exceed the budget", depth + 1);
    }

    #[rstest]
    fn references_do_not_consume_budget() {
        let mut value = vec![Some(Box::new(Some(String::from("翻译1"))))];
        run(&mut value, Some(&Strategy::Line), 1);
        assert_eq!(value[0].as_deref().cloned().flatten().as_deref(), Some("Translation 1"));
    }

    #[rstest]
    fn none_references_are_ignored() {
        let mut value: Option<String> = None;
        let report = run(&mut value, Some(&Strategy::Line), 5);
        assert!(value.is_none());
        assert_eq!(report.translated + report.failed, 0);
    }

    #[rstest]
    fn without_strategy_strings_are_untouched() {
        let mut value = vec![String::from("翻译1")];
        let report = run(&mut value, None, 5);
        assert_eq!(value, ["翻译1"]);
        assert_eq!(report.translated, 0);
    }

    #[rstest]
    fn mapping_values_are_translated_and_keys_kept() {
        let mut value = HashMap::from([(String::from("翻译1"), String::from("翻译1"))]);
        run(&mut value, Some(&Strategy::Line), 1);
        assert_eq!(value.get("翻译1").map(String::as_str), Some("Translation 1"));
    }

    #[rstest]
    fn failures_are_counted_and_last_error_kept() {
        let mut value = vec![
            String::from("缺少1"),
            String::from("翻译1"),
            String::from("缺少2"),
        ];
        let report = run(&mut value, Some(&Strategy::Line), 1);
        assert_eq!(value, ["缺少1", "Translation 1", "缺少2"]);
        assert_eq!((report.translated, report.failed), (1, 2));
        assert!(!report.is_clean());
        assert!(matches!(
            report.last_error,
            Some(LocalizeError::MissingMessage { ref id, .. }) if id == "缺少2"
        ));
    }

    #[rstest]
    fn opaque_values_are_skipped() {
        let mut value = (42_u32, String::from("翻译1"));
        run(&mut value, Some(&Strategy::Line), 1);
        assert_eq!(value, (42, String::from("Translation 1")));
    }
}
