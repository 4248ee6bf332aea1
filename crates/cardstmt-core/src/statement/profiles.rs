//! Issuer profiles: plain configuration records describing how to
//! recognize and parse each supported bank's statement layout.
//!
//! Adding an issuer is a table edit here, not a new type. Declaration
//! order doubles as the classifier tie-break order: on equal scores the
//! earlier profile wins.

use lazy_static::lazy_static;
use regex::Regex;

/// How row amounts map onto signed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignConvention {
    /// Debits are positive; rows flagged `Cr`/`CR` are negated.
    DebitPositive,
}

/// An identifying keyword with its score weight.
pub struct Keyword {
    /// Human-readable keyword text.
    pub text: &'static str,
    /// Whole-word, case-insensitive matcher for the keyword.
    pub pattern: Regex,
    /// Score contributed when the keyword is present.
    pub weight: u32,
}

/// Transaction table layout for one issuer.
pub struct TableSpec {
    /// Patterns whose match opens the table region.
    pub start: Vec<Regex>,
    /// Patterns whose match closes the table region.
    pub end: Vec<Regex>,
    /// Row matcher capturing date, description, amount, and an
    /// optional polarity suffix.
    pub row: Regex,
    /// Minimum description length for a row to count; issuers differ
    /// in how aggressively short rows are dropped.
    pub min_description: usize,
}

/// Configuration record for one supported issuer. Per-field pattern
/// lists are ordered; the first matching pattern wins.
pub struct IssuerProfile {
    pub name: &'static str,
    pub keywords: Vec<Keyword>,
    pub card_number: Vec<Regex>,
    pub billing_cycle: Vec<Regex>,
    pub due_date: Vec<Regex>,
    pub total_balance: Vec<Regex>,
    pub table: Option<TableSpec>,
    pub sign: SignConvention,
}

impl IssuerProfile {
    /// Maximum achievable keyword score, used to normalize confidence.
    pub fn max_score(&self) -> u32 {
        self.keywords.iter().map(|k| k.weight).sum()
    }
}

lazy_static! {
    /// Supported issuer profiles in declaration (tie-break) order.
    /// Read-only, shared by any number of concurrent requests.
    pub static ref PROFILES: Vec<IssuerProfile> = build_profiles();
}

/// Look up a profile by its issuer name.
pub fn by_name(name: &str) -> Option<&'static IssuerProfile> {
    PROFILES.iter().find(|p| p.name == name)
}

fn keyword(text: &'static str, weight: u32) -> Keyword {
    // Tokens joined on \s+ so "HDFC Bank" matches across spacing runs;
    // \b anchors keep short tokens like "SBI" out of longer words.
    let escaped: Vec<String> = text.split_whitespace().map(regex::escape).collect();
    let pattern = format!(r"(?i)\b{}\b", escaped.join(r"\s+"));
    Keyword {
        text,
        pattern: Regex::new(&pattern).unwrap(),
        weight,
    }
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

fn build_profiles() -> Vec<IssuerProfile> {
    vec![hdfc(), icici(), sbi_card(), axis(), kotak()]
}

fn hdfc() -> IssuerProfile {
    IssuerProfile {
        name: "HDFC Bank",
        keywords: vec![keyword("HDFC Bank", 2), keyword("HDFCBANK", 1)],
        card_number: vec![
            re(r"(?i)Card No[.:\s]*\d{4}\s+\d{2}XX\s+XXXX\s+(\d{4})"),
            // digit-spaced layout with masked middle groups
            re(r"(?i)(?:\d\s+){8}(?:X+\s+){2}((?:\d\s*){4})"),
        ],
        billing_cycle: vec![re(
            r"(?i)Statement Period[:\s]*(?:From\s+)?(\d{2}/\d{2}/\d{4})\s*(?:to|[-\u{2013}])\s*(\d{2}/\d{2}/\d{4})",
        )],
        due_date: vec![
            re(r"(?i)Payment Due Date\s+Total Dues\s+Minimum Amount Due\s*\n\s*(\d{2}/\d{2}/\d{4})"),
            re(r"(?i)Payment Due Date[:\s]*(\d{2}/\d{2}/\d{4})"),
        ],
        total_balance: vec![
            re(
                r"(?i)Payment Due Date\s+Total Dues\s+Minimum Amount Due\s*\n\s*\d{2}/\d{2}/\d{4}\s+(?:Rs\.?|\u{20b9}|`)?\s*([\d,]+\.?\d{0,2})",
            ),
            re(r"(?i)Total Dues\s*\n\s*(?:Rs\.?|\u{20b9}|`)?\s*([\d,]+\.?\d{0,2})"),
            re(r"(?i)Total Dues[:\s]+(?:Rs\.?|\u{20b9}|`)?\s*([\d,]+\.?\d{0,2})"),
        ],
        table: Some(TableSpec {
            start: vec![
                re(r"(?i)Domestic Transactions"),
                re(r"(?i)Date\s+Transaction Description"),
            ],
            end: vec![
                re(r"(?i)Reward Points"),
                re(r"(?i)International Transactions"),
                re(r"(?i)For HDFC Bank"),
                re(r"(?i)Page \d+"),
            ],
            row: re(
                r"^(\d{2}/\d{2}/\d{4})\s+(.+?)\s+(?:Rs\.?|\u{20b9}|`)?\s*([\d,]+\.?\d{0,2})(\s+Cr)?$",
            ),
            min_description: 6,
        }),
        sign: SignConvention::DebitPositive,
    }
}

fn icici() -> IssuerProfile {
    IssuerProfile {
        name: "ICICI Bank",
        keywords: vec![keyword("ICICI Bank", 2), keyword("ICICIBANK", 1)],
        card_number: vec![
            re(r"(?i)Card Number\s*:\s*\d{4}\s+XXXX\s+XXXX\s+(\d{4})"),
            re(r"\d{4}\s+XXXX\s+XXXX\s+(\d{4})"),
        ],
        billing_cycle: vec![re(
            r"(?i)Statement Period\s*:\s*From\s+(\d{2}/\d{2}/\d{4})\s+to\s+(\d{2}/\d{2}/\d{4})",
        )],
        due_date: vec![re(r"(?i)Due Date\s*:\s*(\d{2}/\d{2}/\d{4})")],
        total_balance: vec![
            re(r"(?i)Your Total Amount Due\s*[`\u{20b9}]\s*([\d,]+\.?\d{0,2})"),
            re(r"(?i)Your Total Amount Due\s*\n\s*[`\u{20b9}]?\s*([\d,]+\.?\d{0,2})"),
            re(r"(?i)Total Amount Due\s*:\s*[`\u{20b9}]?\s*([\d,]+\.?\d{0,2})"),
        ],
        table: Some(TableSpec {
            start: vec![re(r"(?i)Date\s+Ref\.?\s*Number\s+Transaction Details")],
            end: vec![
                re(r"(?i)Statement Period"),
                re(r"(?i)Great offers"),
                re(r"(?i)Safe Banking"),
                re(r"(?i)State Code"),
            ],
            row: re(
                r"^(\d{2}/\d{2}/\d{4})\s+\d+\s+(.+?)\s+(?:IN|[\d.]+)\s+[\d.]+\s+[\d.]+\s+([\d,]+\.?\d*)\s*(CR)?",
            ),
            min_description: 6,
        }),
        sign: SignConvention::DebitPositive,
    }
}

fn sbi_card() -> IssuerProfile {
    // Classified by keywords only; field extraction relies on the
    // generic fallback patterns.
    IssuerProfile {
        name: "SBI Card",
        keywords: vec![keyword("SBI Card", 2), keyword("State Bank", 1)],
        card_number: Vec::new(),
        billing_cycle: Vec::new(),
        due_date: Vec::new(),
        total_balance: Vec::new(),
        table: None,
        sign: SignConvention::DebitPositive,
    }
}

fn axis() -> IssuerProfile {
    IssuerProfile {
        name: "Axis Bank",
        keywords: vec![keyword("Axis Bank", 2), keyword("AXISBANK", 1)],
        card_number: vec![
            re(r"(?i)Card No[.:\s]*\d{6}\*{6}(\d{4})"),
            re(r"\d{6}\*{6}(\d{4})"),
        ],
        billing_cycle: vec![
            re(
                r"(?i)Statement Period\s+Payment Due Date[^\n]*\n\s*(\d{2}/\d{2}/\d{4})\s*-\s*(\d{2}/\d{2}/\d{4})",
            ),
            re(r"(?i)Statement Period[:\s]+(\d{2}/\d{2}/\d{4})\s*-\s*(\d{2}/\d{2}/\d{4})"),
        ],
        due_date: vec![
            re(
                r"(?i)Statement Period\s+Payment Due Date\s+Statement Generation Date\s*\n\s*\d{2}/\d{2}/\d{4}\s*-\s*\d{2}/\d{2}/\d{4}\s+(\d{2}/\d{2}/\d{4})",
            ),
            re(r"(?i)Payment Due Date[:\s]+(\d{2}/\d{2}/\d{4})"),
        ],
        total_balance: vec![
            re(
                r"(?i)Total Payment Due\s+Minimum Payment Due\s+Statement Period[^\n]*\n\s*([\d,]+\.?\d{0,2})\s+Dr",
            ),
            re(r"(?i)Total Payment Due[:\s]+([\d,]+\.?\d{0,2})\s+Dr"),
        ],
        table: Some(TableSpec {
            start: vec![re(
                r"(?i)DATE\s+TRANSACTION DETAILS\s+MERCHANT CATEGORY\s+AMOUNT",
            )],
            end: vec![
                re(r"(?i)\*{3,}\s*End of Statement"),
                re(r"(?i)EMI BALANCES"),
                re(r"(?i)CONTACT US"),
            ],
            row: re(r"^(\d{2}/\d{2}/\d{4})\s+(.+?)\s+([\d,]+\.?\d{0,2})\s+(Dr|Cr)$"),
            min_description: 4,
        }),
        sign: SignConvention::DebitPositive,
    }
}

fn kotak() -> IssuerProfile {
    // Classified by keywords only, like SBI Card.
    IssuerProfile {
        name: "Kotak Mahindra Bank",
        keywords: vec![keyword("Kotak Mahindra", 2), keyword("Kotak", 1)],
        card_number: Vec::new(),
        billing_cycle: Vec::new(),
        due_date: Vec::new(),
        total_balance: Vec::new(),
        table: None,
        sign: SignConvention::DebitPositive,
    }
}
