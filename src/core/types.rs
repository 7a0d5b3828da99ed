// src/core/types.rs
use crate::core::normalize::normalize_word;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One record of the bilingual source table. Every column is optional;
/// an absent or empty cell is treated as an empty string by the merger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    pub word: Option<String>,
    pub translation: Option<String>,
    pub definition: Option<String>,
    pub example: Option<String>,
    pub phonetic: Option<String>,
}

/// The merged, canonical record for a single word.
/// This is the "value" in the dictionary artifact.
/// Fields are declared in ascending name order; serde writes them in
/// declaration order, so entries come out with sorted keys too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub definition: String,
    pub examples: Vec<String>,
    pub phonetic: String,
    pub translation: String,
}

impl DictionaryEntry {
    pub fn is_blank(&self) -> bool {
        self.translation.is_empty()
            && self.definition.is_empty()
            && self.examples.is_empty()
            && self.phonetic.is_empty()
    }
}

/// Normalized word -> entry. Backed by a `BTreeMap` so iteration and
/// serialization are always in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, DictionaryEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Gets or creates the entry for an already-normalized key.
    pub fn entry_mut(&mut self, key: &str) -> &mut DictionaryEntry {
        self.entries.entry(key.to_string()).or_default()
    }

    pub fn get(&self, key: &str) -> Option<&DictionaryEntry> {
        self.entries.get(key)
    }

    /// Looks up free-form user input: trims and lowercases before the fetch.
    pub fn lookup(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries.get(&normalize_word(word))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictionaryEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
