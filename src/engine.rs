//! The analysis and query engine: owns the store and the interpreter.

use thiserror::Error;

use crate::analysis::{analyze_normalized, content_hash, normalize};
use crate::filter::{apply_filters, FilterError, FilterParams, FilterSpec};
use crate::interpret::{InterpretError, QueryInterpreter};
use crate::store::StringStore;
use crate::types::identifiers::ContentHash;
use crate::types::record::AnalyzedString;
use crate::types::response::{NaturalLanguageResponse, StringsResponse};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),

    #[error("String already exists in the system")]
    Conflict(ContentHash),

    #[error("String does not exist in the system")]
    NotFound,

    #[error("Unable to parse natural language query")]
    Interpretation(#[from] InterpretError),
}

impl From<FilterError> for EngineError {
    fn from(err: FilterError) -> Self {
        EngineError::Validation(err.to_string())
    }
}

#[derive(Debug, Default)]
pub struct AnalysisEngine {
    store: StringStore,
    interpreter: QueryInterpreter,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &StringStore {
        &self.store
    }

    /// Write path: normalize, analyze, insert-if-absent.
    ///
    /// The record keeps `value` as submitted; everything else is derived from
    /// the normalized form. A second submission with the same normalized form
    /// is a conflict and leaves the store unchanged.
    pub fn submit(&self, value: &str) -> Result<AnalyzedString, EngineError> {
        let normalized = normalize(value);
        if normalized.is_empty() {
            return Err(EngineError::Validation(
                "Value field is required and cannot be empty".to_string(),
            ));
        }

        let properties = analyze_normalized(&normalized);
        let id = properties.sha256_hash.clone();

        match self.store.insert_if_absent(value, properties) {
            Some(record) => {
                tracing::info!(id = %record.id, "stored analyzed string");
                Ok(record)
            }
            None => {
                tracing::warn!(%id, "duplicate submission rejected");
                Err(EngineError::Conflict(id))
            }
        }
    }

    /// Look up by raw value (normalized, then hashed).
    pub fn get(&self, value: &str) -> Result<AnalyzedString, EngineError> {
        self.store.get_by_value(value).ok_or_else(|| {
            tracing::debug!(id = %content_hash(value), "lookup miss");
            EngineError::NotFound
        })
    }

    /// Delete by raw value. Deleting an absent value is `NotFound` every time.
    pub fn delete(&self, value: &str) -> Result<(), EngineError> {
        let id = content_hash(value);
        if self.store.delete(&id) {
            tracing::info!(%id, "deleted analyzed string");
            Ok(())
        } else {
            tracing::debug!(%id, "delete miss");
            Err(EngineError::NotFound)
        }
    }

    /// Structured query. Validation happens before anything is read.
    pub fn filter(&self, params: &FilterParams) -> Result<StringsResponse, EngineError> {
        let spec = FilterSpec::from_params(params)?;
        let data = apply_filters(self.store.list(), &spec);

        Ok(StringsResponse {
            count: data.len(),
            data,
            filters_applied: (!spec.is_empty()).then_some(spec),
        })
    }

    /// Free-text query, routed through the interpreter into the same filters.
    pub fn filter_natural_language(
        &self,
        query: &str,
    ) -> Result<NaturalLanguageResponse, EngineError> {
        let interpreted_query = self.interpreter.interpret(query).map_err(|err| {
            tracing::warn!(error = %err, query, "natural language query failed");
            EngineError::from(err)
        })?;
        let data = apply_filters(self.store.list(), &interpreted_query.parsed_filters);

        Ok(NaturalLanguageResponse {
            count: data.len(),
            data,
            interpreted_query,
        })
    }
}
