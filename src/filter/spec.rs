use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::fold_char;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("{field} must be a valid integer")]
    InvalidInteger { field: &'static str, value: String },

    #[error("contains_character must be a single character")]
    InvalidCharacter(String),
}

/// Filter parameters exactly as received from a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

/// A validated conjunction of typed predicates.
/// `None` means "no constraint on that field".
///
/// Lengths and counts are signed: the free-text interpreter may derive a
/// bound of `-1` from "less than 0 characters", which simply matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSpec {
    /// Validate raw parameters. Integers must parse, the character filter
    /// must be exactly one character and is case-folded here.
    pub fn from_params(params: &FilterParams) -> Result<Self, FilterError> {
        let is_palindrome = params
            .is_palindrome
            .as_deref()
            .map(|raw| raw.eq_ignore_ascii_case("true"));

        let min_length = parse_integer("min_length", params.min_length.as_deref())?;
        let max_length = parse_integer("max_length", params.max_length.as_deref())?;
        let word_count = parse_integer("word_count", params.word_count.as_deref())?;

        let contains_character = match params.contains_character.as_deref() {
            None => None,
            Some(raw) => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(fold_char(c)),
                    _ => return Err(FilterError::InvalidCharacter(raw.to_string())),
                }
            }
        };

        Ok(FilterSpec {
            is_palindrome,
            min_length,
            max_length,
            word_count,
            contains_character,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterSpec::default()
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(&mut self, other: FilterSpec) {
        if other.is_palindrome.is_some() {
            self.is_palindrome = other.is_palindrome;
        }
        if other.min_length.is_some() {
            self.min_length = other.min_length;
        }
        if other.max_length.is_some() {
            self.max_length = other.max_length;
        }
        if other.word_count.is_some() {
            self.word_count = other.word_count;
        }
        if other.contains_character.is_some() {
            self.contains_character = other.contains_character;
        }
    }
}

fn parse_integer(field: &'static str, raw: Option<&str>) -> Result<Option<i64>, FilterError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| FilterError::InvalidInteger {
                field,
                value: value.to_string(),
            })
    })
    .transpose()
}
