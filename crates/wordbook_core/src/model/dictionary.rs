//! Single language-pair dictionary.
//!
//! # Responsibility
//! - Map source-language words to exactly one translation each.
//! - Expose exact, case-sensitive lookups.
//!
//! # Invariants
//! - A word maps to exactly one translation; re-adding overwrites.
//! - Keys are compared byte-for-byte (no case folding, no trimming).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word mapping for one `from -> to` language pair.
///
/// Serialized as `{"from": .., "to": .., "words": {..}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Source language display name, e.g. `English`.
    pub from: String,
    /// Target language display name, e.g. `Russian`.
    pub to: String,
    /// Word -> translation. Sorted so the persisted file stays stable.
    pub words: BTreeMap<String, String>,
}

impl Dictionary {
    /// Creates an empty dictionary for the given language pair.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            words: BTreeMap::new(),
        }
    }

    /// Inserts `word` or overwrites its previous translation.
    ///
    /// Callers pass already-trimmed, non-empty values; the interactive
    /// session enforces that before calling.
    pub fn add_word(&mut self, word: impl Into<String>, translation: impl Into<String>) {
        self.words.insert(word.into(), translation.into());
    }

    /// Returns the translation for an exact match of `word`.
    pub fn get_translation(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Language pair label in `From->To` form.
    pub fn label(&self) -> String {
        format!("{}->{}", self.from, self.to)
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether no word has been added yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
