//! Layered analyzer configuration and the one-call initialiser.
//!
//! Sources are merged lowest to highest precedence: built-in defaults, then
//! `langwalk.toml` in the working directory, then `LANGWALK_`-prefixed
//! environment variables. [`init`] turns the result into a ready
//! [`Analyzer`] backed by catalogue files.

use camino::Utf8PathBuf;
use figment::Figment;
use figment::providers::Serialized;
#[cfg(feature = "toml")]
use figment::providers::{Format, Toml};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::{
    Analyzer, CatalogTranslator, ConfigError, DefaultTag, Mode, Strategy, TemplateParse,
};

mod env;

use env::ListEnv;

/// File name searched in the working directory.
pub const CONFIG_FILE: &str = "langwalk.toml";

/// Prefix for environment overrides, such as `LANGWALK_MAX_DEPTH`.
pub const ENV_PREFIX: &str = "LANGWALK_";

/// Settings used to build an [`Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Depth budget for the walk.
    pub max_depth: i32,
    /// Locale whose text is never translated.
    pub origin_locale: String,
    /// Strategy applied to values outside annotated fields.
    pub default_mode: Mode,
    /// Directory holding `<locale>.json` or `<locale>.toml` catalogues.
    pub catalog_dir: Option<Utf8PathBuf>,
    /// Locales whose catalogues are loaded from `catalog_dir`.
    #[serde(deserialize_with = "one_or_many")]
    pub locales: Vec<String>,
    /// Unicode scripts treated as local text by template matching.
    #[serde(deserialize_with = "one_or_many")]
    pub scripts: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_depth: 20,
            origin_locale: String::from("zh"),
            default_mode: Mode::Line,
            catalog_dir: None,
            locales: vec![String::from("en"), String::from("zh")],
            scripts: vec![String::from("Han")],
        }
    }
}

impl AnalyzerConfig {
    /// Loads configuration from defaults, `langwalk.toml` and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Gathering`] when a source is malformed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::figment())
    }

    /// Extracts configuration from a caller-assembled figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Gathering`] when extraction fails.
    pub fn load_from(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        tracing::debug!(?config, "loaded analyzer configuration");
        Ok(config)
    }

    /// The default provider stack used by [`AnalyzerConfig::load`].
    #[must_use]
    pub fn figment() -> Figment {
        with_file_layer(Figment::from(Serialized::defaults(Self::default())))
            .merge(ListEnv::prefixed(ENV_PREFIX))
    }

    /// Parsed origin locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLocale`] when the value is not a locale.
    pub fn origin(&self) -> Result<LanguageIdentifier, ConfigError> {
        parse_locale(&self.origin_locale)
    }

    /// Parsed catalogue locales, in configuration order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLocale`] for the first invalid entry.
    pub fn catalogue_locales(&self) -> Result<Vec<LanguageIdentifier>, ConfigError> {
        self.locales.iter().map(|value| parse_locale(value)).collect()
    }

    /// Template strategy for the configured scripts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScripts`] when a script name is unknown.
    pub fn template(&self) -> Result<Strategy, ConfigError> {
        if self.scripts == ["Han"] {
            return Ok(Strategy::Template);
        }
        TemplateParse::for_scripts(&self.scripts)
            .map(Strategy::custom)
            .map_err(|source| ConfigError::InvalidScripts {
                scripts: self.scripts.clone(),
                source,
            })
    }

    /// Strategy implementing `default_mode` for the configured scripts.
    ///
    /// Scripts are validated in every mode.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScripts`] when a script name is unknown.
    pub fn strategy(&self) -> Result<Strategy, ConfigError> {
        let template = self.template()?;
        Ok(match self.default_mode {
            Mode::Line => Strategy::Line,
            Mode::Template => template,
        })
    }

    /// Tag resolver whose `mod=template` fields use the configured scripts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScripts`] when a script name is unknown.
    pub fn tag_resolver(&self) -> Result<DefaultTag, ConfigError> {
        self.template().map(DefaultTag::with_template)
    }
}

#[cfg(feature = "toml")]
fn with_file_layer(figment: Figment) -> Figment {
    figment.merge(Toml::file(CONFIG_FILE))
}

#[cfg(not(feature = "toml"))]
const fn with_file_layer(figment: Figment) -> Figment {
    figment
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accepts a lone string where a list is expected, so `LANGWALK_LOCALES=en`
/// reads as `["en"]`.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    })
}

fn parse_locale(value: &str) -> Result<LanguageIdentifier, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidLocale {
        value: value.to_owned(),
        source,
    })
}

/// Builds an [`Analyzer`] from configuration.
///
/// Catalogues for every configured locale are read from `catalog_dir`; when
/// no directory is set the analyzer starts with empty catalogues and every
/// string keeps its original text.
///
/// # Errors
///
/// Returns [`ConfigError`] when a locale or script is invalid or a catalogue
/// fails to load.
///
/// # Examples
/// ```rust
/// use langwalk::{AnalyzerConfig, Context, init, langid};
///
/// let analyzer = init(&AnalyzerConfig::default())?;
/// assert_eq!(analyzer.max_depth(), 20);
/// let cx = Context::from(langid!("en"));
/// assert_eq!(analyzer.analyze(&cx, String::from("翻译1")), "翻译1");
/// # Ok::<(), langwalk::ConfigError>(())
/// ```
pub fn init(config: &AnalyzerConfig) -> Result<Analyzer, ConfigError> {
    let origin = config.origin()?;
    let mut builder = CatalogTranslator::builder().default_locale(origin.clone());
    if let Some(dir) = &config.catalog_dir {
        builder = builder.with_dir(dir, config.catalogue_locales()?)?;
    } else {
        tracing::warn!("no catalogue directory configured; strings will not be translated");
    }
    let analyzer = Analyzer::builder(builder.build())
        .strategy(config.strategy()?)
        .tag_resolver(config.tag_resolver()?)
        .max_depth(config.max_depth)
        .origin(origin)
        .build();
    tracing::info!(
        max_depth = config.max_depth,
        mode = config.default_mode.as_str(),
        "analyzer initialised"
    );
    Ok(analyzer)
}
