use std::collections::BTreeSet;

use crate::analysis::normalize::{comparison_form, folded_chars};
use crate::types::identifiers::ContentHash;
use crate::types::record::{CharacterFrequencyMap, StringProperties};

/// Compute the property set of an already-normalized value.
///
/// Pure and total: the same input always yields the same output, byte for
/// byte, including the content hash.
pub fn analyze_normalized(normalized: &str) -> StringProperties {
    StringProperties {
        length: normalized.chars().count(),
        is_palindrome: is_palindrome(normalized),
        unique_characters: unique_characters(normalized),
        word_count: word_count(normalized),
        sha256_hash: ContentHash::of_normalized(normalized),
        character_frequency_map: character_frequency_map(normalized),
    }
}

/// A comparison form of length <= 1 is a palindrome by definition.
pub fn is_palindrome(normalized: &str) -> bool {
    let form = comparison_form(normalized);
    if form.len() <= 1 {
        return true;
    }

    let mid = form.len() / 2;
    (0..mid).all(|i| form[i] == form[form.len() - 1 - i])
}

/// Distinct case-folded characters, space excluded.
pub fn unique_characters(normalized: &str) -> usize {
    folded_chars(normalized)
        .filter(|c| *c != ' ')
        .collect::<BTreeSet<char>>()
        .len()
}

pub fn word_count(normalized: &str) -> usize {
    // split_whitespace yields nothing for "", so empty input counts 0.
    normalized.split_whitespace().count()
}

pub fn character_frequency_map(normalized: &str) -> CharacterFrequencyMap {
    let mut map = CharacterFrequencyMap::new();
    for c in folded_chars(normalized).filter(|c| *c != ' ') {
        map.increment(c);
    }
    map
}
