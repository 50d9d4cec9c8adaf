//! Scripted translators for exercising the analyzer.

use std::collections::HashMap;

use langwalk::{Context, LocalizeError, Translator};
use parking_lot::Mutex;

/// Translator backed by a single catalogue that records every key it is
/// asked for, regardless of locale.
#[derive(Debug, Default)]
pub struct RecordingTranslator {
    messages: HashMap<String, String>,
    asked: Mutex<Vec<String>>,
}

impl RecordingTranslator {
    /// Creates a translator answering from `messages`.
    #[must_use]
    pub fn new<I, K, V>(messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            messages: messages
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Keys looked up so far, in call order.
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().clone()
    }

    /// Forgets previously recorded lookups.
    pub fn reset(&self) {
        self.asked.lock().clear();
    }
}

impl Translator for RecordingTranslator {
    fn translate_one(&self, cx: &Context, line: &str) -> Result<String, LocalizeError> {
        self.asked.lock().push(line.to_owned());
        self.messages.get(line).cloned().ok_or_else(|| {
            LocalizeError::missing(line, cx.locale().cloned().unwrap_or_default())
        })
    }
}

/// Translator whose backend is always unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingTranslator;

impl Translator for FailingTranslator {
    fn translate_one(&self, _cx: &Context, _line: &str) -> Result<String, LocalizeError> {
        Err(LocalizeError::backend(std::io::Error::other("catalogue offline")))
    }
}
