//! Keyed collection of dictionaries.
//!
//! # Responsibility
//! - Own every `Dictionary` under a unique short key such as `en-ru`.
//! - Define the persisted top-level shape (`{"dicts": {..}}`).
//!
//! # Invariants
//! - Keys are unique; adding under an existing key replaces the old value.
//! - Iteration order is sorted by key.

use crate::model::dictionary::Dictionary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every dictionary known to the tool, keyed by language-pair code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryCollection {
    // Why: sorted keys give a reproducible listing and a stable file diff.
    dicts: BTreeMap<String, Dictionary>,
}

impl DictionaryCollection {
    /// Creates an empty collection; startup seeding uses `default_collection`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `dict` at `key`, replacing any dictionary already there.
    pub fn add_dictionary(&mut self, key: impl Into<String>, dict: Dictionary) {
        self.dicts.insert(key.into(), dict);
    }

    /// Returns the dictionary at `key`; `None` is a normal outcome.
    pub fn get_dictionary(&self, key: &str) -> Option<&Dictionary> {
        self.dicts.get(key)
    }

    /// Mutable access used by write mode.
    pub fn get_dictionary_mut(&mut self, key: &str) -> Option<&mut Dictionary> {
        self.dicts.get_mut(key)
    }

    /// Returns keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.dicts.keys().map(String::as_str)
    }

    /// Returns `(key, dictionary)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dictionary)> {
        self.dicts.iter().map(|(key, dict)| (key.as_str(), dict))
    }

    /// Number of dictionaries.
    pub fn len(&self) -> usize {
        self.dicts.len()
    }

    /// Returns whether the collection holds no dictionary.
    pub fn is_empty(&self) -> bool {
        self.dicts.is_empty()
    }
}
