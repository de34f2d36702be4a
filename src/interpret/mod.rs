//! Free-text phrase to structured filter translation.
//!
//! This is a fixed, ordered table of heuristics over the lowercased phrase,
//! not a grammar. Every rule runs; their partial specs are merged in order.
//! A phrase that matches nothing yields an empty spec, which is not an error.

pub mod rules;

use thiserror::Error;

use crate::filter::FilterSpec;
use crate::types::response::InterpretedQuery;

pub use rules::{standard_rules, Rule};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    #[error("number {digits:?} in rule {rule} is out of range")]
    NumberOutOfRange { rule: &'static str, digits: String },
}

#[derive(Debug, Clone)]
pub struct QueryInterpreter {
    rules: Vec<Rule>,
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::new(standard_rules())
    }
}

impl QueryInterpreter {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Translate `phrase` into a filter spec.
    pub fn interpret(&self, phrase: &str) -> Result<InterpretedQuery, InterpretError> {
        let folded = phrase.to_lowercase();
        let mut parsed = FilterSpec::default();

        for rule in &self.rules {
            if let Some(partial) = rule.apply(&folded)? {
                tracing::debug!(rule = rule.name, ?partial, "rule matched");
                parsed.merge(partial);
            }
        }

        Ok(InterpretedQuery {
            original: phrase.to_string(),
            parsed_filters: parsed,
        })
    }
}
