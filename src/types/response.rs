use serde::{Deserialize, Serialize};

use crate::filter::FilterSpec;
use crate::types::record::AnalyzedString;

/// Result of a structured filter query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringsResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    /// Omitted when the caller supplied no filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<FilterSpec>,
}

/// Echo of how a free-text phrase was understood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSpec,
}

/// Result of a natural-language query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}
