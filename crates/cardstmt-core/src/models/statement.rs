//! Statement data models and the wire response shape.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::statement::rules::amounts::{format_amount, format_signed_amount};
use crate::statement::rules::dates::format_date;

/// Placeholder rendered for fields that could not be located.
pub const PLACEHOLDER: &str = "Not found";

/// Issuer name rendered when no profile matched.
pub const UNKNOWN_ISSUER: &str = "Unknown";

/// Outcome of a single field extraction: the typed value with the raw
/// text it was matched from, or an explicit absence. Absence is a
/// normal outcome, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted<T> {
    Found { value: T, raw: String },
    NotFound,
}

impl<T> Extracted<T> {
    pub fn found(value: T, raw: impl Into<String>) -> Self {
        Self::Found {
            value,
            raw: raw.into(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Found { value, .. } => Some(value),
            Self::NotFound => None,
        }
    }

    /// Source text the field was matched from, for diagnostics.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Found { raw, .. } => Some(raw),
            Self::NotFound => None,
        }
    }

    /// Render the value, substituting the placeholder when absent.
    pub fn render(&self, f: impl Fn(&T) -> String) -> String {
        match self {
            Self::Found { value, .. } => f(value),
            Self::NotFound => PLACEHOLDER.to_string(),
        }
    }
}

impl<T> Default for Extracted<T> {
    fn default() -> Self {
        Self::NotFound
    }
}

/// A card number in the fixed display convention: masked groups of
/// four, last four digits visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedCardNumber(String);

impl MaskedCardNumber {
    pub fn from_last_four(last_four: &str) -> Self {
        Self(format!("XXXX XXXX XXXX {last_four}"))
    }

    pub fn last_four(&self) -> &str {
        &self.0[self.0.len() - 4..]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaskedCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A billing cycle with the start date always before the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingCycle {
    start: NaiveDate,
    end: NaiveDate,
}

impl BillingCycle {
    /// Build a cycle from two dates in either order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\u{2013}{}",
            self.start.format("%d/%m/%Y"),
            self.end.format("%d/%m/%Y")
        )
    }
}

/// Outcome of issuer classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationResult {
    /// Matched issuer name, or None when no profile scored above the
    /// threshold.
    pub issuer: Option<&'static str>,

    /// Score normalized against the profile's maximum possible score,
    /// clamped to [0, 1]. Unknown always carries 0.0.
    pub confidence: f32,
}

impl ClassificationResult {
    pub fn unknown() -> Self {
        Self {
            issuer: None,
            confidence: 0.0,
        }
    }

    pub fn is_known(&self) -> bool {
        self.issuer.is_some()
    }

    pub fn issuer_name(&self) -> &str {
        self.issuer.unwrap_or(UNKNOWN_ISSUER)
    }
}

/// A single parsed transaction row.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub description: String,

    /// Signed amount: debits positive, credits negative.
    pub amount: Decimal,

    /// Original row text, kept for diagnostics.
    pub raw: String,
}

impl TransactionRecord {
    pub fn is_credit(&self) -> bool {
        self.amount.is_sign_negative()
    }
}

/// The scalar fields recovered from a statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementFields {
    pub card_number: Extracted<MaskedCardNumber>,
    pub billing_cycle: Extracted<BillingCycle>,
    pub due_date: Extracted<NaiveDate>,
    pub total_balance: Extracted<Decimal>,
}

/// Aggregate result of one pipeline invocation. Immutable after
/// assembly; owned by the request that produced it.
#[derive(Debug, Clone)]
pub struct StatementResult {
    pub classification: ClassificationResult,
    pub fields: StatementFields,

    /// Parsed transactions in encountered order, truncated at the cap.
    pub transactions: Vec<TransactionRecord>,

    /// Non-fatal notes on what could not be recovered.
    pub warnings: Vec<String>,
}

impl StatementResult {
    /// Render the wire response, substituting placeholders for gaps.
    pub fn to_response(&self) -> ParseResponse {
        ParseResponse {
            issuer: self.classification.issuer_name().to_string(),
            card_number: self.fields.card_number.render(|c| c.to_string()),
            billing_cycle: self.fields.billing_cycle.render(|c| c.to_string()),
            due_date: self.fields.due_date.render(|d| format_date(*d)),
            total_balance: self.fields.total_balance.render(|a| format_amount(*a)),
            transactions: self
                .transactions
                .iter()
                .map(|t| TransactionEntry {
                    date: format_date(t.date),
                    description: t.description.clone(),
                    amount: format_signed_amount(t.amount),
                })
                .collect(),
        }
    }
}

/// Wire shape consumed by the UI collaborator. Field names are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub issuer: String,
    pub card_number: String,
    pub billing_cycle: String,
    pub due_date: String,
    pub total_balance: String,
    pub transactions: Vec<TransactionEntry>,
}

/// One transaction row in the wire response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub date: String,
    pub description: String,
    pub amount: String,
}
