//! Response localisation by walking arbitrary values.
//!
//! `langwalk` rewrites the human-readable strings nested inside a value
//! (records, sequences, mappings and optional references) into a target
//! locale. Records opt fields in or out with annotations, and each subtree can
//! pick between verbatim full-text lookup and template matching for strings
//! that embed untranslatable tokens such as product names.
//!
//! ```rust
//! use langwalk::{Analyzer, CatalogTranslator, Context, Localize, langid};
//!
//! #[derive(Localize)]
//! struct Report {
//!     #[localize(mod = "template")]
//!     title: String,
//!     #[localize(block)]
//!     owner: String,
//!     notes: Vec<String>,
//! }
//!
//! let translator = CatalogTranslator::builder()
//!     .with_messages(
//!         langid!("en"),
//!         [("计算@$/@$数据", "Data for @2$/@1$"), ("翻译1", "Translation 1")],
//!     )
//!     .build();
//! let analyzer = Analyzer::new(translator);
//!
//! let report = analyzer.analyze(
//!     &Context::from(langid!("en")),
//!     Report {
//!         title: "计算SDK/APP数据".into(),
//!         owner: "翻译1".into(),
//!         notes: vec!["翻译1".into()],
//!     },
//! );
//! assert_eq!(report.title, "Data for APP/SDK");
//! assert_eq!(report.owner, "翻译1");
//! assert_eq!(report.notes, ["Translation 1"]);
//! ```

extern crate self as langwalk;

/// Derives [`shape::Localize`] and [`shape::Record`] for structs and enums.
///
/// Field attributes: `#[localize = "..."]` for a raw annotation,
/// `#[localize(mod = "line" | "template")]`, `#[localize(block)]` and `#[localize(skip)]`.
/// The container attribute `#[localize(crate = "path")]` overrides the path used
/// to reach this crate.
pub use langwalk_macros::Localize;

mod analyzer;
mod config;
mod context;
mod error;
mod parse;
pub mod shape;
mod tag;
mod translator;
mod walk;

pub use analyzer::{Analyzer, AnalyzerBuilder, default_origin};
pub use config::{AnalyzerConfig, CONFIG_FILE, ENV_PREFIX, init};
pub use context::Context;
pub use error::{CatalogError, ConfigError, LocalizeError, TagError};
pub use parse::{LineParse, PLACEHOLDER, Parse, Strategy, TemplateParse};
pub use shape::Localize;
pub use tag::{Annotation, BLOCK, DefaultTag, Mode, TagResolver};
pub use translator::{
    Batch, CatalogFormat, CatalogTranslator, CatalogTranslatorBuilder, Entry, Filtered,
    NoOpTranslator, Translator,
};
pub use unic_langid::{LanguageIdentifier, langid};
pub use walk::{WalkReport, Walker};
