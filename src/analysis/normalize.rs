/// Canonicalize raw input.
/// Normalization rules:
/// - Leading and trailing whitespace removed
/// - Every internal whitespace run collapsed to a single ASCII space
/// - Whitespace-only input becomes the empty string
pub fn normalize(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for (i, word) in raw.split_whitespace().enumerate() {
        if i > 0 {
            normalized.push(' ');
        }
        normalized.push_str(word);
    }
    normalized
}

/// Case-fold a single character.
///
/// Characters whose lowercase mapping expands to more than one scalar
/// (e.g. `'İ'`) are kept unchanged, so folding never alters the character
/// count of a string.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Case-folded characters of `s`, one per input character.
pub fn folded_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(fold_char)
}

/// Case-folded, ASCII-alphanumeric-only form used for palindrome checks.
pub fn comparison_form(normalized: &str) -> Vec<char> {
    folded_chars(normalized)
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
