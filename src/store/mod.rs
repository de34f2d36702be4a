use std::collections::HashMap;

use chrono::Utc;
use parking_lot::Mutex;

use crate::analysis::content_hash;
use crate::types::identifiers::ContentHash;
use crate::types::record::{AnalyzedString, StringProperties};

#[derive(Debug, Default)]
struct StoreInner {
    records: HashMap<ContentHash, AnalyzedString>,
    // Insertion order of live ids.
    order: Vec<ContentHash>,
}

impl StoreInner {
    fn put(&mut self, value: String, properties: StringProperties) -> AnalyzedString {
        let record = AnalyzedString {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        };

        // Re-inserting an existing id replaces the record in place, keeping its
        // position in the listing.
        if self
            .records
            .insert(record.id.clone(), record.clone())
            .is_none()
        {
            self.order.push(record.id.clone());
        }
        record
    }
}

/// Content-addressed, in-memory record store.
///
/// Every operation takes the single internal lock, so reads and writes are
/// linearizable per key. The store itself never rejects anything; duplicate
/// policy belongs to the caller, which should go through
/// [`StringStore::insert_if_absent`] to keep the check and the write in one
/// critical section.
#[derive(Debug, Default)]
pub struct StringStore {
    inner: Mutex<StoreInner>,
}

impl StringStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record keyed by `properties.sha256_hash`, replacing any record
    /// with the same id.
    pub fn insert(&self, value: impl Into<String>, properties: StringProperties) -> AnalyzedString {
        self.inner.lock().put(value.into(), properties)
    }

    /// Atomic existence check plus insert. Returns `None` when a record with
    /// the same id is already present; the store is left untouched.
    pub fn insert_if_absent(
        &self,
        value: impl Into<String>,
        properties: StringProperties,
    ) -> Option<AnalyzedString> {
        let mut inner = self.inner.lock();
        if inner.records.contains_key(&properties.sha256_hash) {
            return None;
        }
        Some(inner.put(value.into(), properties))
    }

    /// Whether a record exists for the normalized form of `value`.
    pub fn exists(&self, value: &str) -> bool {
        let id = content_hash(value);
        self.inner.lock().records.contains_key(&id)
    }

    pub fn get_by_id(&self, id: &ContentHash) -> Option<AnalyzedString> {
        self.inner.lock().records.get(id).cloned()
    }

    /// Look up by raw value, re-hashed after normalization.
    pub fn get_by_value(&self, value: &str) -> Option<AnalyzedString> {
        self.get_by_id(&content_hash(value))
    }

    /// Every record, in insertion order.
    pub fn list(&self) -> Vec<AnalyzedString> {
        let inner = self.inner.lock();
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }

    /// Remove a record. Returns whether anything was removed.
    pub fn delete(&self, id: &ContentHash) -> bool {
        let mut inner = self.inner.lock();
        if inner.records.remove(id).is_none() {
            return false;
        }
        inner.order.retain(|existing| existing != id);
        true
    }

    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().records.is_empty()
    }
}
