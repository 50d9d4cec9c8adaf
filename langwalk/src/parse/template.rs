//! Template matching for strings that mix translatable text with literal
//! tokens.
//!
//! A token is a maximal run of characters that are not whitespace, not in the
//! local script, and not Unicode punctuation or symbols. Tokens are replaced
//! by [`PLACEHOLDER`] to form the catalogue key, and the translated template
//! refers back to them with `@<n>$` (1-indexed, in source order):
//!
//! ```text
//! key:     计算@$/@$数据
//! value:   Data for @2$/@1$
//! input:   计算SDK/APP数据
//! output:  Data for APP/SDK
//! ```

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

use super::Parse;
use crate::{Batch, Context, Entry, LocalizeError, Translator};

/// Marker substituted for every captured token in a catalogue key.
pub const PLACEHOLDER: &str = "@$";

#[expect(clippy::expect_used, reason = "constant pattern")]
static HAN: LazyLock<TemplateParse> =
    LazyLock::new(|| TemplateParse::for_scripts(["Han"]).expect("Han is a Unicode script"));

#[expect(clippy::expect_used, reason = "constant pattern")]
static BACK_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([0-9]+)\$").expect("valid back-reference pattern"));

/// Template strategy parameterised by the local script(s).
#[derive(Debug, Clone)]
pub struct TemplateParse {
    tokens: Regex,
}

impl TemplateParse {
    /// Shared strategy treating Han characters as the local script.
    #[must_use]
    pub fn han() -> &'static Self {
        &HAN
    }

    /// Builds a strategy treating the named Unicode scripts as local text.
    ///
    /// # Errors
    ///
    /// Returns a [`regex::Error`] when a script name is not a Unicode script
    /// known to the `regex` crate.
    ///
    /// # Examples
    /// ```rust
    /// use langwalk::TemplateParse;
    ///
    /// let japanese = TemplateParse::for_scripts(["Han", "Hiragana", "Katakana"])
    ///     .expect("known scripts");
    /// assert_eq!(japanese.tokens("SDKの設定"), ["SDK"]);
    /// assert!(TemplateParse::for_scripts(["Klingon"]).is_err());
    /// ```
    pub fn for_scripts<I, S>(scripts: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: String = scripts
            .into_iter()
            .map(|script| format!(r"\p{{{}}}", script.as_ref()))
            .collect();
        let tokens = Regex::new(&format!(r"[^\s{classes}\p{{P}}\p{{S}}]+"))?;
        Ok(Self { tokens })
    }

    /// Literal tokens found in `line`, in source order.
    #[must_use]
    pub fn tokens<'a>(&self, line: &'a str) -> Vec<&'a str> {
        self.tokens.find_iter(line).map(|m| m.as_str()).collect()
    }

    /// Catalogue key for `line`: every token replaced by [`PLACEHOLDER`].
    #[must_use]
    pub fn key(&self, line: &str) -> String {
        self.tokens
            .replace_all(line, NoExpand(PLACEHOLDER))
            .into_owned()
    }

    fn rematch(
        &self,
        cx: &Context,
        translator: &dyn Translator,
        original: String,
        line_error: LocalizeError,
    ) -> Entry {
        let tokens = self.tokens(&original);
        if tokens.is_empty() {
            if original.trim().is_empty() {
                return Entry::translated(original);
            }
            return Entry::fallback(original, line_error);
        }
        let key = self.key(&original);
        match translator.translate_one(cx, &key) {
            Ok(template) => {
                let text = substitute(&template, &tokens);
                Entry::translated(text)
            }
            Err(err) => {
                tracing::debug!(key = %key, error = %err, "template lookup failed");
                Entry::fallback(original, err)
            }
        }
    }
}

impl Parse for TemplateParse {
    fn parse(&self, cx: &Context, translator: &dyn Translator, input: Vec<String>) -> Batch {
        if input.is_empty() {
            return Batch::new();
        }
        let lines = translator.translate(cx, input);
        if lines.is_complete() {
            return lines;
        }
        lines
            .into_iter()
            .map(|entry| match entry.error {
                None => entry,
                Some(err) => self.rematch(cx, translator, entry.text, err),
            })
            .collect()
    }
}

/// Replaces `@<n>$` back-references with the n-th token. References outside
/// the captured range are left verbatim.
fn substitute(template: &str, tokens: &[&str]) -> String {
    BACK_REFERENCE
        .replace_all(template, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            caps.get(1)
                .and_then(|n| n.as_str().parse::<usize>().ok())
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| tokens.get(index))
                .map_or_else(|| whole.to_owned(), |token| (*token).to_owned())
        })
        .into_owned()
}
