//! Rule-based field extractors for statement text.

pub mod amounts;
pub mod card_number;
pub mod dates;
pub mod patterns;

use regex::{Captures, Regex};

use crate::models::statement::Extracted;

/// A field value recovered from text, with the source that matched.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch<T> {
    pub value: T,
    pub raw: String,
}

impl<T> From<Option<RuleMatch<T>>> for Extracted<T> {
    fn from(m: Option<RuleMatch<T>>) -> Self {
        match m {
            Some(m) => Extracted::found(m.value, m.raw),
            None => Extracted::NotFound,
        }
    }
}

/// Run a pattern cascade: issuer-specific patterns first, then the
/// generic fallbacks, in declared order. The first pattern that matches
/// wins; its match is handed to the normalizer, and a normalizer
/// rejection marks the field absent rather than trying later patterns.
pub fn first_match<T>(
    text: &str,
    issuer_patterns: &[Regex],
    generic_patterns: &[Regex],
    normalize: impl Fn(&Captures) -> Option<T>,
) -> Option<RuleMatch<T>> {
    for pattern in issuer_patterns.iter().chain(generic_patterns.iter()) {
        if let Some(caps) = pattern.captures(text) {
            let raw = caps
                .get(0)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            return normalize(&caps).map(|value| RuleMatch { value, raw });
        }
    }
    None
}
