//! Word list used to validate candidate plaintexts.

use caesar_core::{CaesarError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Uppercased word set, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build from any word iterator. Words are uppercased, blanks dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read a newline-delimited word list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CaesarError::io(path, e))?;
        let dict = Self::from_words(content.lines());
        tracing::debug!(path = %path.display(), words = dict.len(), "loaded dictionary");
        Ok(dict)
    }

    /// Case-insensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Fraction of whitespace-delimited tokens in `text` that are dictionary words.
    ///
    /// Returns `None` when `text` has no tokens.
    pub fn match_fraction(&self, text: &str, strip_punctuation: bool) -> Option<f64> {
        let mut total = 0usize;
        let mut hits = 0usize;
        for token in text.split_whitespace() {
            total += 1;
            let token = if strip_punctuation {
                token.trim_matches(|c: char| c.is_ascii_punctuation())
            } else {
                token
            };
            if self.contains(token) {
                hits += 1;
            }
        }
        if total == 0 {
            None
        } else {
            Some(hits as f64 / total as f64)
        }
    }
}
