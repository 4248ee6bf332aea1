//! Issuer classification by weighted keyword scoring.

use tracing::debug;

use super::profiles::{IssuerProfile, PROFILES};
use crate::models::statement::ClassificationResult;

/// Score one profile against the text: the sum of weights of its
/// keywords present. Presence is whole-word and case-insensitive.
fn score(profile: &IssuerProfile, text: &str) -> u32 {
    profile
        .keywords
        .iter()
        .filter(|k| k.pattern.is_match(text))
        .map(|k| k.weight)
        .sum()
}

/// Choose the best-matching issuer profile.
///
/// The strictly highest score wins, so equal scores keep the earlier
/// profile in declaration order. A best score below `min_score` is a
/// normal Unknown classification, not an error; downstream stages then
/// use only the generic patterns.
pub fn classify(text: &str, min_score: u32) -> ClassificationResult {
    let mut best: Option<(&'static IssuerProfile, u32)> = None;

    for profile in PROFILES.iter() {
        let s = score(profile, text);
        if s > 0 {
            debug!("issuer {} scored {}", profile.name, s);
        }
        if s > best.map(|(_, b)| b).unwrap_or(0) {
            best = Some((profile, s));
        }
    }

    match best {
        Some((profile, s)) if s >= min_score => {
            let confidence = (s as f32 / profile.max_score().max(1) as f32).clamp(0.0, 1.0);
            ClassificationResult {
                issuer: Some(profile.name),
                confidence,
            }
        }
        _ => ClassificationResult::unknown(),
    }
}
