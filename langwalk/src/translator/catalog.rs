//! Full-text message catalogues keyed by source text.
//!
//! Each locale owns a flat map from the source-language text to its
//! translation. Catalogues load from JSON objects or TOML tables, either from
//! strings or from `<dir>/<locale>.<ext>` files.

use std::collections::HashMap;
use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use unic_langid::LanguageIdentifier;

use super::Translator;
use crate::{CatalogError, Context, LocalizeError};

/// Serialisation formats accepted for catalogue files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogFormat {
    /// A flat JSON object of strings.
    #[cfg(feature = "serde_json")]
    Json,
    /// A flat TOML table of strings.
    #[cfg(feature = "toml")]
    Toml,
}

impl CatalogFormat {
    /// Formats enabled in this build, in lookup preference order.
    pub const ENABLED: &'static [Self] = &[
        #[cfg(feature = "serde_json")]
        Self::Json,
        #[cfg(feature = "toml")]
        Self::Toml,
    ];

    /// File extension associated with the format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            #[cfg(feature = "serde_json")]
            Self::Json => "json",
            #[cfg(feature = "toml")]
            Self::Toml => "toml",
        }
    }

    /// Infers the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let extension = path.extension()?;
        Self::ENABLED
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    fn parse(
        self,
        locale: &LanguageIdentifier,
        source: &str,
    ) -> Result<HashMap<String, String>, CatalogError> {
        match self {
            #[cfg(feature = "serde_json")]
            Self::Json => serde_json::from_str(source).map_err(|err| CatalogError::Json {
                locale: locale.clone(),
                source: err,
            }),
            #[cfg(feature = "toml")]
            Self::Toml => toml::from_str(source).map_err(|err| CatalogError::Toml {
                locale: locale.clone(),
                source: err,
            }),
        }
    }
}

/// Translator backed by in-memory full-text catalogues.
///
/// Lookups target the context locale, falling back to the builder's default
/// locale when the context has none. A locale without its own catalogue uses
/// any catalogue sharing its language subtag (`en-GB` reads `en`).
#[derive(Clone, Default)]
pub struct CatalogTranslator {
    catalogues: HashMap<LanguageIdentifier, HashMap<String, String>>,
    default_locale: LanguageIdentifier,
}

impl CatalogTranslator {
    /// Starts building a catalogue translator.
    #[must_use]
    pub fn builder() -> CatalogTranslatorBuilder {
        CatalogTranslatorBuilder::default()
    }

    /// Locales with a registered catalogue.
    pub fn locales(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.catalogues.keys()
    }

    /// Exact match first, then the bare language catalogue, then the
    /// lowest-sorting catalogue sharing the language subtag.
    fn catalogue_for(&self, locale: &LanguageIdentifier) -> Option<&HashMap<String, String>> {
        self.catalogues.get(locale).or_else(|| {
            self.catalogues
                .iter()
                .filter(|(candidate, _)| candidate.language == locale.language)
                .min_by_key(|(candidate, _)| (!is_bare_language(candidate), candidate.to_string()))
                .map(|(_, messages)| messages)
        })
    }
}

fn is_bare_language(locale: &LanguageIdentifier) -> bool {
    locale.script.is_none() && locale.region.is_none() && locale.variants().next().is_none()
}

impl Translator for CatalogTranslator {
    fn translate_one(&self, cx: &Context, line: &str) -> Result<String, LocalizeError> {
        if line.is_empty() {
            return Ok(String::new());
        }
        let locale = cx.locale_or(&self.default_locale);
        self.catalogue_for(locale)
            .and_then(|messages| messages.get(line))
            .cloned()
            .ok_or_else(|| LocalizeError::missing(line, locale.clone()))
    }
}

impl fmt::Debug for CatalogTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sizes: HashMap<String, usize> = self
            .catalogues
            .iter()
            .map(|(locale, messages)| (locale.to_string(), messages.len()))
            .collect();
        f.debug_struct("CatalogTranslator")
            .field("catalogues", &sizes)
            .field("default_locale", &self.default_locale)
            .finish()
    }
}

/// Builds a [`CatalogTranslator`].
#[derive(Debug, Default)]
pub struct CatalogTranslatorBuilder {
    inner: CatalogTranslator,
}

impl CatalogTranslatorBuilder {
    /// Locale used when the context does not carry one.
    #[must_use]
    pub fn default_locale(mut self, locale: LanguageIdentifier) -> Self {
        self.inner.default_locale = locale;
        self
    }

    /// Registers messages for `locale`, overriding earlier entries with the
    /// same source text.
    #[must_use]
    pub fn with_messages<I, K, V>(mut self, locale: LanguageIdentifier, messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.inner
            .catalogues
            .entry(locale)
            .or_default()
            .extend(messages.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Parses `source` in `format` and registers its messages for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the source is not a flat map of strings.
    pub fn with_source(
        self,
        locale: LanguageIdentifier,
        format: CatalogFormat,
        source: &str,
    ) -> Result<Self, CatalogError> {
        let messages = format.parse(&locale, source)?;
        Ok(self.with_messages(locale, messages))
    }

    /// Parses a JSON object of strings for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] when the source is not a flat object of
    /// strings.
    #[cfg(feature = "serde_json")]
    pub fn with_json(self, locale: LanguageIdentifier, source: &str) -> Result<Self, CatalogError> {
        self.with_source(locale, CatalogFormat::Json, source)
    }

    /// Parses a TOML table of strings for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Toml`] when the source is not a flat table of
    /// strings.
    #[cfg(feature = "toml")]
    pub fn with_toml(self, locale: LanguageIdentifier, source: &str) -> Result<Self, CatalogError> {
        self.with_source(locale, CatalogFormat::Toml, source)
    }

    /// Loads a catalogue file named after its locale, such as `en-US.json`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file cannot be read, has an unknown
    /// extension, is not named after a locale, or fails to parse.
    pub fn with_file(self, path: impl AsRef<Utf8Path>) -> Result<Self, CatalogError> {
        let file = path.as_ref();
        let format =
            CatalogFormat::from_path(file).ok_or_else(|| CatalogError::UnsupportedFormat {
                path: file.to_owned(),
            })?;
        let stem = file.file_stem().unwrap_or_default();
        let locale: LanguageIdentifier =
            stem.parse().map_err(|err| CatalogError::InvalidLocale {
                path: file.to_owned(),
                source: err,
            })?;
        self.load(locale, format, file)
    }

    /// Loads `<dir>/<locale>.<ext>` for each locale, trying the enabled
    /// formats in order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when no catalogue file exists for a
    /// locale, or any error raised while parsing the files found.
    pub fn with_dir<I>(self, dir: impl AsRef<Utf8Path>, locales: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = LanguageIdentifier>,
    {
        let root = dir.as_ref();
        let mut builder = self;
        for locale in locales {
            let (format, file) = locate(root, &locale)?;
            builder = builder.load(locale, format, &file)?;
        }
        Ok(builder)
    }

    /// Finishes the translator.
    #[must_use]
    pub fn build(self) -> CatalogTranslator {
        self.inner
    }

    fn load(
        self,
        locale: LanguageIdentifier,
        format: CatalogFormat,
        file: &Utf8Path,
    ) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(file).map_err(|err| CatalogError::Io {
            path: file.to_owned(),
            source: err,
        })?;
        let messages = format.parse(&locale, &source)?;
        tracing::info!(
            locale = %locale,
            path = %file,
            messages = messages.len(),
            "loaded message catalogue"
        );
        Ok(self.with_messages(locale, messages))
    }
}

fn locate(
    root: &Utf8Path,
    locale: &LanguageIdentifier,
) -> Result<(CatalogFormat, Utf8PathBuf), CatalogError> {
    let candidates: Vec<(CatalogFormat, Utf8PathBuf)> = CatalogFormat::ENABLED
        .iter()
        .map(|format| (*format, root.join(format!("{locale}.{}", format.extension()))))
        .collect();
    if let Some(found) = candidates.iter().find(|(_, path)| path.is_file()) {
        return Ok(found.clone());
    }
    let path = candidates
        .into_iter()
        .next()
        .map_or_else(|| root.join(locale.to_string()), |(_, path)| path);
    Err(CatalogError::Io {
        path,
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    })
}
