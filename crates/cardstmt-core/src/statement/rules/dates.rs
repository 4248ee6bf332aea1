//! Date parsing for the fixed DD/MM/YYYY statement convention.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::{BILLING_CYCLE_GENERIC, DUE_DATE_GENERIC};
use super::{first_match, RuleMatch};
use crate::models::statement::BillingCycle;

lazy_static! {
    static ref DATE_DDMMYYYY: Regex = Regex::new(r"\b(\d{2})/(\d{2})/(\d{4})\b").unwrap();
}

/// Parse a DD/MM/YYYY date. Impossible calendar dates are rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let caps = DATE_DDMMYYYY.captures(s)?;
    capture_date(&caps)
}

/// Render a date in the canonical DD/MM/YYYY form.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn capture_date(caps: &regex::Captures) -> Option<NaiveDate> {
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// All valid dates inside a text fragment, in source order.
fn dates_in(text: &str) -> Vec<NaiveDate> {
    DATE_DDMMYYYY
        .captures_iter(text)
        .filter_map(|caps| capture_date(&caps))
        .collect()
}

/// Extract the payment due date, issuer patterns first.
pub fn extract_due_date(text: &str, issuer_patterns: &[Regex]) -> Option<RuleMatch<NaiveDate>> {
    first_match(text, issuer_patterns, &DUE_DATE_GENERIC, |caps| {
        parse_date(caps.get(1)?.as_str())
    })
}

/// Extract the billing cycle, issuer patterns first. Two valid dates
/// make a cycle, ordered start-before-end; a single date is an
/// absence, never a guess.
pub fn extract_billing_cycle(
    text: &str,
    issuer_patterns: &[Regex],
) -> Option<RuleMatch<BillingCycle>> {
    first_match(text, issuer_patterns, &BILLING_CYCLE_GENERIC, |caps| {
        let dates = dates_in(caps.get(0)?.as_str());
        if dates.len() < 2 {
            return None;
        }
        Some(BillingCycle::new(dates[0], dates[1]))
    })
}
