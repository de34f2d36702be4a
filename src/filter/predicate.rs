use crate::filter::spec::FilterSpec;
use crate::types::record::StringProperties;

/// A single typed constraint over stored properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    IsPalindrome(bool),
    MinLength(i64),
    MaxLength(i64),
    WordCount(i64),
    ContainsCharacter(char),
}

impl Predicate {
    pub fn matches(&self, properties: &StringProperties) -> bool {
        match *self {
            Predicate::IsPalindrome(expected) => properties.is_palindrome == expected,
            Predicate::MinLength(min) => as_signed(properties.length) >= min,
            Predicate::MaxLength(max) => as_signed(properties.length) <= max,
            Predicate::WordCount(count) => as_signed(properties.word_count) == count,
            Predicate::ContainsCharacter(c) => properties.character_frequency_map.contains(c),
        }
    }
}

fn as_signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl FilterSpec {
    /// The predicates this spec constrains, in evaluation order.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::with_capacity(5);
        if let Some(expected) = self.is_palindrome {
            predicates.push(Predicate::IsPalindrome(expected));
        }
        if let Some(min) = self.min_length {
            predicates.push(Predicate::MinLength(min));
        }
        if let Some(max) = self.max_length {
            predicates.push(Predicate::MaxLength(max));
        }
        if let Some(count) = self.word_count {
            predicates.push(Predicate::WordCount(count));
        }
        if let Some(c) = self.contains_character {
            predicates.push(Predicate::ContainsCharacter(c));
        }
        predicates
    }
}
