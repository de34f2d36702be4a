//! Structured filtering over stored records.
//!
//! Predicates combine with logical AND only; there is no OR and no negation.

pub mod predicate;
pub mod spec;

pub use predicate::Predicate;
pub use spec::{FilterError, FilterParams, FilterSpec};

use crate::types::record::AnalyzedString;

/// Keep the records that satisfy every predicate in `spec`, preserving order.
pub fn apply_filters(records: Vec<AnalyzedString>, spec: &FilterSpec) -> Vec<AnalyzedString> {
    let predicates = spec.predicates();
    let considered = records.len();

    let matched: Vec<AnalyzedString> = records
        .into_iter()
        .filter(|record| predicates.iter().all(|p| p.matches(&record.properties)))
        .collect();

    tracing::debug!(
        considered,
        matched = matched.len(),
        predicates = predicates.len(),
        "applied filters"
    );
    matched
}
