//! Transaction table extraction.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::profiles::{IssuerProfile, SignConvention};
use super::rules::amounts::parse_amount;
use super::rules::dates::parse_date;
use super::rules::patterns::{TXN_END_GENERIC, TXN_ROW_GENERIC, TXN_START_GENERIC};
use crate::models::config::ExtractionConfig;
use crate::models::statement::TransactionRecord;

lazy_static! {
    static ref REF_NOISE: Regex = Regex::new(r"\(Ref#[^)]*\)").unwrap();
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Extract transaction rows from the statement text.
///
/// The table region opens at the first start-marker line; a line that
/// itself matches the row shape also opens the region and yields the
/// first record, which covers header-less statement dumps. The region
/// closes at the first end marker or end of text. Inside the region,
/// lines that do not match the row shape are skipped silently. With no
/// region found the result is empty, never an error. The cap is applied
/// by truncation in encountered order.
pub fn extract_transactions(
    text: &str,
    profile: Option<&IssuerProfile>,
    config: &ExtractionConfig,
) -> Vec<TransactionRecord> {
    let table = profile.and_then(|p| p.table.as_ref());
    let (start, end, row): (&[Regex], &[Regex], &Regex) = match table {
        Some(spec) => (&spec.start, &spec.end, &spec.row),
        None => (&TXN_START_GENERIC, &TXN_END_GENERIC, &TXN_ROW_GENERIC),
    };
    let min_description = table
        .map(|spec| spec.min_description)
        .unwrap_or(config.min_description_len);
    let sign = profile.map(|p| p.sign).unwrap_or(SignConvention::DebitPositive);

    let mut records = Vec::new();
    let mut in_region = false;

    for line in text.lines() {
        if !in_region {
            if start.iter().any(|m| m.is_match(line)) || row.is_match(line.trim()) {
                in_region = true;
            } else {
                continue;
            }
        } else if end.iter().any(|m| m.is_match(line)) {
            break;
        }

        if let Some(record) = parse_row(line.trim(), row, sign, min_description, config) {
            records.push(record);
        }
    }

    if records.len() > config.max_transactions {
        debug!(
            "truncating {} transactions to cap {}",
            records.len(),
            config.max_transactions
        );
        records.truncate(config.max_transactions);
    }
    records
}

fn parse_row(
    line: &str,
    row: &Regex,
    sign: SignConvention,
    min_description: usize,
    config: &ExtractionConfig,
) -> Option<TransactionRecord> {
    let caps = row.captures(line)?;

    let date = parse_date(caps.get(1)?.as_str())?;

    let description = clean_description(caps.get(2)?.as_str(), config.max_description_len);
    if description.len() < min_description {
        return None;
    }

    // row amounts use an exclusive plausibility window
    let amount = parse_amount(caps.get(3)?.as_str())?;
    if amount <= config.txn_min_amount || amount >= config.txn_max_amount {
        return None;
    }

    let credit = caps
        .get(4)
        .map(|m| m.as_str().trim().eq_ignore_ascii_case("cr"))
        .unwrap_or(false);
    let amount = match sign {
        SignConvention::DebitPositive => {
            if credit {
                -amount
            } else {
                amount
            }
        }
    };

    Some(TransactionRecord {
        date,
        description,
        amount,
        raw: line.to_string(),
    })
}

/// Strip reference noise, collapse whitespace, and bound the length.
fn clean_description(raw: &str, max_len: usize) -> String {
    let cleaned = REF_NOISE.replace_all(raw, "");
    let collapsed = MULTI_SPACE.replace_all(cleaned.trim(), " ");
    collapsed.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::profiles::by_name;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config() -> ExtractionConfig {
        ExtractionConfig::default()
    }

    #[test]
    fn test_rows_outside_the_region_are_never_included() {
        let hdfc = by_name("HDFC Bank");
        let text = "\
Date  Transaction Description
01/01/2024 COFFEE SHOP PURCHASE 100.00
02/01/2024 BOOK STORE ORDER 250.00 Cr
Page 1
03/01/2024 AFTER THE TABLE ENDED 999.00";

        let records = extract_transactions(text, hdfc, &config());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "COFFEE SHOP PURCHASE");
        assert_eq!(records[0].amount, Decimal::from_str("100.00").unwrap());
        assert!(records[1].is_credit());
        assert_eq!(records[1].amount, Decimal::from_str("-250.00").unwrap());
    }

    #[test]
    fn test_row_shaped_line_opens_the_region() {
        // no header at all, rows are still recovered
        let text = "05/01/2024 AMAZON SHOPPING Rs. 2,500.00\n10/01/2024 SWIGGY FOOD Rs. 850.00";
        let records = extract_transactions(text, None, &config());
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
    }

    #[test]
    fn test_no_marker_and_no_rows_yields_empty() {
        let text = "Thank you for banking with us.\nVisit us online for offers.";
        assert!(extract_transactions(text, None, &config()).is_empty());
    }

    #[test]
    fn test_non_matching_lines_inside_region_are_skipped() {
        let text = "\
Domestic Transactions
01/01/2024 GROCERY STORE 500.00
-- carried forward --
02/01/2024 PETROL PUMP 1,200.00";

        let records = extract_transactions(text, by_name("HDFC Bank"), &config());
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_cap_truncates_in_encountered_order() {
        let mut text = String::from("Transaction Details\n");
        for day in 1..=15 {
            text.push_str(&format!("{:02}/01/2024 MERCHANT NUMBER {} 100.00\n", day, day));
        }

        let records = extract_transactions(&text, None, &config());
        assert_eq!(records.len(), 10);
        assert_eq!(
            records[9].date,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
    }

    #[test]
    fn test_implausible_amounts_and_short_descriptions_are_skipped() {
        let text = "\
Transaction Details
01/01/2024 LEGITIMATE MERCHANT 500.00
02/01/2024 AB 500.00
03/01/2024 SUSPICIOUS ENTRY 99,999,999,999.00";

        let records = extract_transactions(text, None, &config());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "LEGITIMATE MERCHANT");
    }

    #[test]
    fn test_row_amount_window_is_exclusive() {
        let text = "\
Transaction Details
01/01/2024 ROUNDING ADJUSTMENT 0.01
02/01/2024 REGULAR PURCHASE 500.00
03/01/2024 BOUNDARY GLITCH 10,000,000.00
04/01/2024 LARGE TRANSFER 50,000,000.00";

        // both bounds excluded; a balance-sized amount is not a row
        let records = extract_transactions(text, None, &config());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "REGULAR PURCHASE");
    }

    #[test]
    fn test_description_threshold_follows_the_issuer_table() {
        let hdfc_text = "\
Domestic Transactions
01/01/2024 CAFES 500.00
02/01/2024 COFFEE HOUSE 500.00";

        let records = extract_transactions(hdfc_text, by_name("HDFC Bank"), &config());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "COFFEE HOUSE");

        // Axis keeps shorter descriptions
        let axis_text = "\
DATE  TRANSACTION DETAILS  MERCHANT CATEGORY  AMOUNT
01/01/2024 FUEL 500.00 Dr";

        let records = extract_transactions(axis_text, by_name("Axis Bank"), &config());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "FUEL");
    }

    #[test]
    fn test_axis_rows_with_polarity_suffix() {
        let axis = by_name("Axis Bank");
        let text = "\
DATE  TRANSACTION DETAILS  MERCHANT CATEGORY  AMOUNT
05/01/2024 FUEL STATION 1,000.00 Dr
08/01/2024 PAYMENT RECEIVED 2,000.00 Cr
*** End of Statement ***";

        let records = extract_transactions(text, axis, &config());
        assert_eq!(records.len(), 2);
        assert!(!records[0].is_credit());
        assert!(records[1].is_credit());
    }

    #[test]
    fn test_description_cleanup() {
        assert_eq!(
            clean_description("  AMAZON   SHOPPING (Ref#12345)  ", 80),
            "AMAZON SHOPPING"
        );
        assert_eq!(clean_description("ABCDEFGH", 4), "ABCD");
    }
}
