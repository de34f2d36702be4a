use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::ContentHash;

/// Occurrence count per case-folded character, spaces excluded.
///
/// Backed by a `BTreeMap` so serialized key order is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterFrequencyMap {
    inner: BTreeMap<char, usize>,
}

impl CharacterFrequencyMap {
    pub fn new() -> Self {
        CharacterFrequencyMap {
            inner: BTreeMap::new(),
        }
    }

    pub fn increment(&mut self, c: char) {
        *self.inner.entry(c).or_insert(0) += 1;
    }

    pub fn contains(&self, c: char) -> bool {
        self.inner.contains_key(&c)
    }

    pub fn get(&self, c: char) -> Option<usize> {
        self.inner.get(&c).copied()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.inner.values().sum()
    }
}

/// The computed property set of a normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: ContentHash,
    pub character_frequency_map: CharacterFrequencyMap,
}

/// A stored record. Never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedString {
    pub id: ContentHash,
    /// The value exactly as first submitted, before normalization.
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}
