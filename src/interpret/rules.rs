use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::filter::FilterSpec;
use crate::interpret::InterpretError;

// ASCII digits only; other numerals leave the rule silent.
static WORD_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*word").expect("word count pattern"));
static CHARACTER_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*character").expect("character count pattern"));
static EXPLICIT_CHARACTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"contain(s|ing)?\s*(the\s+)?(letter|character)\s+([a-z])")
        .expect("explicit character pattern")
});
static LONE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([a-z])\s").expect("lone letter pattern"));

pub type RuleResult = Result<Option<FilterSpec>, InterpretError>;

/// One heuristic: inspects the case-folded phrase and optionally yields a
/// partial filter spec.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    apply: fn(&str) -> RuleResult,
}

impl Rule {
    pub const fn new(name: &'static str, apply: fn(&str) -> RuleResult) -> Self {
        Self { name, apply }
    }

    pub fn apply(&self, folded: &str) -> RuleResult {
        (self.apply)(folded)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The fixed rule order. Each rule runs independently; results are merged.
pub fn standard_rules() -> Vec<Rule> {
    vec![
        Rule::new("palindrome", palindrome),
        Rule::new("word_count", word_count),
        Rule::new("longer_than", longer_than),
        Rule::new("shorter_than", shorter_than),
        Rule::new("contains_character", contains_character),
    ]
}

fn palindrome(folded: &str) -> RuleResult {
    if folded.contains("palindromic") || folded.contains("palindrome") {
        return Ok(Some(FilterSpec {
            is_palindrome: Some(true),
            ..FilterSpec::default()
        }));
    }
    Ok(None)
}

fn word_count(folded: &str) -> RuleResult {
    let count = if folded.contains("single word") || folded.contains("one word") {
        Some(1)
    } else if folded.contains("word") {
        WORD_COUNT
            .captures(folded)
            .map(|caps| captured_number("word_count", &caps))
            .transpose()?
    } else {
        None
    };

    Ok(count.map(|n| FilterSpec {
        word_count: Some(n),
        ..FilterSpec::default()
    }))
}

// "more than 3 characters" is exclusive; the stored bound is inclusive.
fn longer_than(folded: &str) -> RuleResult {
    if !(folded.contains("longer than") || folded.contains("more than")) {
        return Ok(None);
    }
    let Some(caps) = CHARACTER_COUNT.captures(folded) else {
        return Ok(None);
    };
    let n = captured_number("longer_than", &caps)?;
    let min = n.checked_add(1).ok_or_else(|| out_of_range("longer_than", &caps))?;
    Ok(Some(FilterSpec {
        min_length: Some(min),
        ..FilterSpec::default()
    }))
}

fn shorter_than(folded: &str) -> RuleResult {
    if !(folded.contains("shorter than") || folded.contains("less than")) {
        return Ok(None);
    }
    let Some(caps) = CHARACTER_COUNT.captures(folded) else {
        return Ok(None);
    };
    let n = captured_number("shorter_than", &caps)?;
    let max = n.checked_sub(1).ok_or_else(|| out_of_range("shorter_than", &caps))?;
    Ok(Some(FilterSpec {
        max_length: Some(max),
        ..FilterSpec::default()
    }))
}

// The lone-letter fallback is loose on purpose and will pick up incidental
// words such as "a" in "strings with a palindrome".
fn contains_character(folded: &str) -> RuleResult {
    let found = EXPLICIT_CHARACTER
        .captures(folded)
        .and_then(|caps| caps.get(4))
        .or_else(|| LONE_LETTER.captures(folded).and_then(|caps| caps.get(1)))
        .and_then(|m| m.as_str().chars().next());

    Ok(found.map(|c| FilterSpec {
        contains_character: Some(c),
        ..FilterSpec::default()
    }))
}

fn captured_number(rule: &'static str, caps: &Captures<'_>) -> Result<i64, InterpretError> {
    let digits = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    digits.parse::<i64>().map_err(|_| InterpretError::NumberOutOfRange {
        rule,
        digits: digits.to_string(),
    })
}

fn out_of_range(rule: &'static str, caps: &Captures<'_>) -> InterpretError {
    InterpretError::NumberOutOfRange {
        rule,
        digits: caps.get(1).map(|m| m.as_str()).unwrap_or_default().to_string(),
    }
}
