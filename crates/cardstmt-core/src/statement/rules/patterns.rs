//! Generic fallback patterns shared across issuers.
//!
//! These run after any issuer-specific patterns, and alone when the
//! classifier reports Unknown.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Card number: labeled masked forms, then a standalone masked run.
    pub static ref CARD_NUMBER_GENERIC: Vec<Regex> = vec![
        Regex::new(r"(?i)Card\s*(?:No|Number|#)[.:\s]*((?:[X*\d]{2,6}[\s\-]*){2,5}\d{3,4})")
            .unwrap(),
        Regex::new(r"((?:[X*]{4}[\s\-]+){3}\d{4})").unwrap(),
    ];

    // Billing cycle: two DD/MM/YYYY dates around a range separator.
    pub static ref BILLING_CYCLE_GENERIC: Vec<Regex> = vec![
        Regex::new(
            r"(?i)Statement Period[:\s]*(?:From\s+)?(\d{2}/\d{2}/\d{4})\s*(?:to|[-\u{2013}])\s*(\d{2}/\d{2}/\d{4})"
        )
        .unwrap(),
        Regex::new(
            r"(?i)Billing (?:Cycle|Period)[:\s]*(\d{2}/\d{2}/\d{4})\s*(?:to|[-\u{2013}])\s*(\d{2}/\d{2}/\d{4})"
        )
        .unwrap(),
    ];

    pub static ref DUE_DATE_GENERIC: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:Payment\s+)?Due Date[:\s]*(\d{2}/\d{2}/\d{4})").unwrap(),
        Regex::new(r"(?i)Pay(?:ment)?\s+by[:\s]*(\d{2}/\d{2}/\d{4})").unwrap(),
    ];

    pub static ref TOTAL_BALANCE_GENERIC: Vec<Regex> = vec![
        Regex::new(
            r"(?i)Total (?:Amount|Payment) Due[:\s]*(?:Rs\.?|\u{20b9}|`)?\s*([\d,]+\.?\d{0,2})"
        )
        .unwrap(),
        Regex::new(
            r"(?i)Total (?:Dues|Balance|Outstanding)[:\s]*(?:Rs\.?|\u{20b9}|`)?\s*([\d,]+\.?\d{0,2})"
        )
        .unwrap(),
    ];

    // Transaction table markers and row shape for unprofiled layouts.
    pub static ref TXN_START_GENERIC: Vec<Regex> = vec![
        Regex::new(r"(?i)Domestic Transactions").unwrap(),
        Regex::new(r"(?i)^\s*Date\s+(?:Transaction|Ref|Description|Details)").unwrap(),
        Regex::new(r"(?i)Transaction Details").unwrap(),
    ];

    pub static ref TXN_END_GENERIC: Vec<Regex> = vec![
        Regex::new(r"(?i)End of Statement").unwrap(),
        Regex::new(r"(?i)Reward Points").unwrap(),
        Regex::new(r"(?i)Page \d+").unwrap(),
    ];

    pub static ref TXN_ROW_GENERIC: Regex = Regex::new(
        r"^\s*(\d{2}/\d{2}/\d{4})\s+(.+?)\s+(?:Rs\.?|\u{20b9}|`)?\s*([\d,]+\.?\d{0,2})\s*(Cr|CR|Dr)?\s*$"
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_card_pattern_captures_masked_run() {
        let caps = CARD_NUMBER_GENERIC[0]
            .captures("Card Number: XXXX XXXX XXXX 1234")
            .unwrap();
        assert_eq!(caps[1].trim(), "XXXX XXXX XXXX 1234");
    }

    #[test]
    fn test_generic_row_tolerates_currency_prefix() {
        let caps = TXN_ROW_GENERIC
            .captures("05/01/2024 AMAZON SHOPPING Rs. 2,500.00")
            .unwrap();
        assert_eq!(&caps[2], "AMAZON SHOPPING");
        assert_eq!(&caps[3], "2,500.00");
        assert!(caps.get(4).is_none());
    }

    #[test]
    fn test_generic_row_captures_polarity() {
        let caps = TXN_ROW_GENERIC
            .captures("10/01/2024 PAYMENT RECEIVED 850.00 Cr")
            .unwrap();
        assert_eq!(&caps[4], "Cr");
    }
}
