//! Rupee amount parsing and formatting.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use super::patterns::TOTAL_BALANCE_GENERIC;
use super::{first_match, RuleMatch};

/// Parse an amount string, stripping currency markers and thousands
/// separators. Negative or non-numeric input is rejected.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let stripped = s.replace("Rs.", " ").replace(['\u{20b9}', '`'], " ");
    let stripped = stripped.trim();
    if stripped.contains('-') {
        return None;
    }

    let cleaned: String = stripped
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Extract the total balance, issuer patterns first. Amounts outside
/// the plausible range are rejected.
pub fn extract_total_balance(
    text: &str,
    issuer_patterns: &[Regex],
    min: Decimal,
    max: Decimal,
) -> Option<RuleMatch<Decimal>> {
    first_match(text, issuer_patterns, &TOTAL_BALANCE_GENERIC, |caps| {
        let amount = parse_amount(caps.get(1)?.as_str())?;
        if amount < min || amount > max {
            return None;
        }
        Some(amount)
    })
}

/// Format an amount as `Rs. 1,234.56` (western digit grouping, two
/// decimal places).
pub fn format_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount.abs());
    let (int_part, dec_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let chars: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("Rs. {}.{}", grouped, dec_part)
}

/// Render a signed transaction amount; credits carry a `Cr` marker.
pub fn format_signed_amount(amount: Decimal) -> String {
    if amount.is_sign_negative() {
        format!("{} Cr", format_amount(amount))
    } else {
        format_amount(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("15,450.00"), Some(dec("15450.00")));
        assert_eq!(parse_amount("Rs. 2,500.00"), Some(dec("2500.00")));
        assert_eq!(parse_amount("\u{20b9}850.00"), Some(dec("850.00")));
        assert_eq!(parse_amount("1234"), Some(dec("1234")));
    }

    #[test]
    fn test_parse_amount_rejects_negative_and_garbage() {
        assert!(parse_amount("-500.00").is_none());
        assert!(parse_amount("N/A").is_none());
        assert!(parse_amount("12.34.56").is_none());
    }

    #[test]
    fn test_extract_total_balance_with_range() {
        let min = dec("0.01");
        let max = dec("100000000");

        let m = extract_total_balance("Total Amount Due: Rs. 15,450.00", &[], min, max).unwrap();
        assert_eq!(m.value, dec("15450.00"));

        // the pattern matches but the amount is implausible
        assert!(extract_total_balance("Total Amount Due: Rs. 0.00", &[], min, max).is_none());
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec("15450")), "Rs. 15,450.00");
        assert_eq!(format_amount(dec("1234567.5")), "Rs. 1,234,567.50");
        assert_eq!(format_amount(dec("850")), "Rs. 850.00");
    }

    #[test]
    fn test_format_signed_amount_marks_credits() {
        assert_eq!(format_signed_amount(dec("2500")), "Rs. 2,500.00");
        assert_eq!(format_signed_amount(dec("-850")), "Rs. 850.00 Cr");
    }
}
