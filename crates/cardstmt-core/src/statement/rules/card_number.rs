//! Card number extraction and masking.

use regex::Regex;

use super::patterns::CARD_NUMBER_GENERIC;
use super::{first_match, RuleMatch};
use crate::models::statement::MaskedCardNumber;

/// Normalize a captured digit run to the masked display convention,
/// whatever separators the source used. Fewer than four recoverable
/// trailing digits fails the field.
pub fn normalize_card_capture(capture: &str) -> Option<MaskedCardNumber> {
    let digits: String = capture.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return None;
    }
    Some(MaskedCardNumber::from_last_four(&digits[digits.len() - 4..]))
}

/// Extract the masked card number, issuer patterns first.
pub fn extract_card_number(
    text: &str,
    issuer_patterns: &[Regex],
) -> Option<RuleMatch<MaskedCardNumber>> {
    first_match(text, issuer_patterns, &CARD_NUMBER_GENERIC, |caps| {
        // the last participating capture group holds the trailing run
        let capture = caps.iter().skip(1).flatten().last()?;
        normalize_card_capture(capture.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::profiles::by_name;

    #[test]
    fn test_normalization_masks_to_last_four() {
        let card = normalize_card_capture("4321 9876 5432 1098").unwrap();
        assert_eq!(card.to_string(), "XXXX XXXX XXXX 1098");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_card_capture("XXXX XXXX XXXX 1234").unwrap();
        let twice = normalize_card_capture(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_fewer_than_four_digits_fails_the_field() {
        assert!(normalize_card_capture("XXX 123").is_none());
        assert!(normalize_card_capture("XXXX XXXX XXXX").is_none());
    }

    #[test]
    fn test_extract_with_generic_pattern() {
        let m = extract_card_number("Card Number: XXXX XXXX XXXX 1234", &[]).unwrap();
        assert_eq!(m.value.last_four(), "1234");
    }

    #[test]
    fn test_extract_with_axis_masked_form() {
        let axis = by_name("Axis Bank").unwrap();
        let m = extract_card_number("Card No. 456789******9876", &axis.card_number).unwrap();
        assert_eq!(m.value.to_string(), "XXXX XXXX XXXX 9876");
    }

    #[test]
    fn test_extract_with_hdfc_partial_mask() {
        let hdfc = by_name("HDFC Bank").unwrap();
        let m = extract_card_number("Card No: 4321 98XX XXXX 1098", &hdfc.card_number).unwrap();
        assert_eq!(m.value.last_four(), "1098");
    }
}
