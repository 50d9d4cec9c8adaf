//! Per-line translation outcomes.

use crate::LocalizeError;

/// Result of translating one line.
///
/// `text` always holds usable output: the translation on success, or the
/// original input when `error` is set.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Translated text, or the original text on failure.
    pub text: String,
    /// Lookup failure for this line, if any.
    pub error: Option<LocalizeError>,
}

impl Entry {
    /// Successful translation.
    #[must_use]
    pub const fn translated(text: String) -> Self {
        Self { text, error: None }
    }

    /// Failed translation keeping the `original` text.
    #[must_use]
    pub const fn fallback(original: String, error: LocalizeError) -> Self {
        Self {
            text: original,
            error: Some(error),
        }
    }

    /// Returns `true` when the line was translated.
    #[must_use]
    pub const fn is_translated(&self) -> bool {
        self.error.is_none()
    }
}

/// Ordered outcomes for a batch of lines, one [`Entry`] per input line.
///
/// Errors aggregate weakly: [`Batch::last_error`] reports only the most
/// recent failure in input order and never invalidates the translations that
/// succeeded.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    entries: Vec<Entry>,
}

impl Batch {
    /// Creates an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an outcome.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Number of lines in the batch.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the batch holds no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Outcome for each line in input order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Output text for each line in input order.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.text.as_str()).collect()
    }

    /// Consumes the batch, returning the output text for each line.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.entries.into_iter().map(|entry| entry.text).collect()
    }

    /// Consumes the batch, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Most recent failure in input order.
    #[must_use]
    pub fn last_error(&self) -> Option<&LocalizeError> {
        self.entries
            .iter()
            .rev()
            .find_map(|entry| entry.error.as_ref())
    }

    /// Returns `true` when every line was translated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(Entry::is_translated)
    }

    /// Splits the batch into output lines and the advisory last error.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Option<LocalizeError>) {
        let last_error = self.last_error().cloned();
        (self.into_lines(), last_error)
    }
}

impl FromIterator<Entry> for Batch {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Batch {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Extend<Entry> for Batch {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
