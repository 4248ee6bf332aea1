//! Statement parsing pipeline and assembly.

use regex::Regex;
use tracing::{debug, info};

use super::classifier::classify;
use super::profiles::{self, IssuerProfile};
use super::rules::amounts::extract_total_balance;
use super::rules::card_number::extract_card_number;
use super::rules::dates::{extract_billing_cycle, extract_due_date};
use super::transactions::extract_transactions;
use crate::models::config::EngineConfig;
use crate::models::statement::{
    ClassificationResult, StatementFields, StatementResult, TransactionRecord,
};
use crate::pdf::RawDocumentText;

const NO_PATTERNS: &[Regex] = &[];

/// Trait for statement parsing.
pub trait StatementParser {
    /// Run the full pipeline over extracted document text.
    fn parse(&self, document: &RawDocumentText) -> StatementResult;
}

/// Rule-based statement engine backed by the issuer profile tables.
///
/// Holds only read-only configuration, so one engine can serve any
/// number of concurrent requests.
pub struct StatementEngine {
    config: EngineConfig,
}

impl StatementEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn extract_fields(&self, text: &str, profile: Option<&IssuerProfile>) -> StatementFields {
        let card = profile.map(|p| p.card_number.as_slice()).unwrap_or(NO_PATTERNS);
        let cycle = profile.map(|p| p.billing_cycle.as_slice()).unwrap_or(NO_PATTERNS);
        let due = profile.map(|p| p.due_date.as_slice()).unwrap_or(NO_PATTERNS);
        let balance = profile.map(|p| p.total_balance.as_slice()).unwrap_or(NO_PATTERNS);

        let extraction = &self.config.extraction;
        StatementFields {
            card_number: extract_card_number(text, card).into(),
            billing_cycle: extract_billing_cycle(text, cycle).into(),
            due_date: extract_due_date(text, due).into(),
            total_balance: extract_total_balance(
                text,
                balance,
                extraction.min_amount,
                extraction.max_amount,
            )
            .into(),
        }
    }
}

impl Default for StatementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser for StatementEngine {
    fn parse(&self, document: &RawDocumentText) -> StatementResult {
        let text = document.text();
        info!("parsing statement from {} lines of text", document.len());

        let classification = classify(&text, self.config.classifier.min_score);
        match classification.issuer {
            Some(name) => debug!(
                "classified as {} (confidence {:.2})",
                name, classification.confidence
            ),
            None => debug!("no issuer matched; using generic patterns only"),
        }

        let profile = classification.issuer.and_then(profiles::by_name);

        // Field and transaction extraction are independent of each
        // other; both read only the text and the chosen profile.
        let fields = self.extract_fields(&text, profile);
        let transactions = extract_transactions(&text, profile, &self.config.extraction);

        assemble(classification, fields, transactions)
    }
}

/// Compose the final result. Pure composition: absent fields and an
/// empty transaction list are normal outcomes, never failures.
pub fn assemble(
    classification: ClassificationResult,
    fields: StatementFields,
    transactions: Vec<TransactionRecord>,
) -> StatementResult {
    let mut warnings = Vec::new();
    if !classification.is_known() {
        warnings.push("could not identify issuer".to_string());
    }
    if !fields.card_number.is_found() {
        warnings.push("could not extract card number".to_string());
    }
    if !fields.billing_cycle.is_found() {
        warnings.push("could not extract billing cycle".to_string());
    }
    if !fields.due_date.is_found() {
        warnings.push("could not extract due date".to_string());
    }
    if !fields.total_balance.is_found() {
        warnings.push("could not extract total balance".to_string());
    }
    if transactions.is_empty() {
        warnings.push("no transaction table found".to_string());
    }

    StatementResult {
        classification,
        fields,
        transactions,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statement::{ParseResponse, TransactionEntry};
    use pretty_assertions::assert_eq;

    const HDFC_STATEMENT: &str = "\
HDFC Bank Credit Card Statement
Card Number: XXXX XXXX XXXX 1234
Statement Period: 01/01/2024 to 31/01/2024
Payment Due Date: 15/02/2024
Total Amount Due: Rs. 15,450.00
05/01/2024 AMAZON SHOPPING Rs. 2,500.00
10/01/2024 SWIGGY FOOD Rs. 850.00";

    #[test]
    fn test_end_to_end_hdfc_statement() {
        let engine = StatementEngine::new();
        let result = engine.parse(&RawDocumentText::from_text(HDFC_STATEMENT));

        assert_eq!(result.classification.issuer, Some("HDFC Bank"));

        let response = result.to_response();
        let expected = ParseResponse {
            issuer: "HDFC Bank".to_string(),
            card_number: "XXXX XXXX XXXX 1234".to_string(),
            billing_cycle: "01/01/2024\u{2013}31/01/2024".to_string(),
            due_date: "15/02/2024".to_string(),
            total_balance: "Rs. 15,450.00".to_string(),
            transactions: vec![
                TransactionEntry {
                    date: "05/01/2024".to_string(),
                    description: "AMAZON SHOPPING".to_string(),
                    amount: "Rs. 2,500.00".to_string(),
                },
                TransactionEntry {
                    date: "10/01/2024".to_string(),
                    description: "SWIGGY FOOD".to_string(),
                    amount: "Rs. 850.00".to_string(),
                },
            ],
        };
        assert_eq!(response, expected);
    }

    #[test]
    fn test_unknown_issuer_falls_back_to_generic_patterns() {
        let text = "\
Some Regional Bank Credit Card
Card Number: XXXX XXXX XXXX 9876
Payment Due Date: 10/03/2024
Total Amount Due: Rs. 5,000.00";

        let engine = StatementEngine::new();
        let result = engine.parse(&RawDocumentText::from_text(text));

        assert!(!result.classification.is_known());
        assert_eq!(result.classification.confidence, 0.0);

        let response = result.to_response();
        assert_eq!(response.issuer, "Unknown");
        assert_eq!(response.card_number, "XXXX XXXX XXXX 9876");
        assert_eq!(response.due_date, "10/03/2024");
        assert_eq!(response.total_balance, "Rs. 5,000.00");
        // no statement period line: absent, not guessed
        assert_eq!(response.billing_cycle, "Not found");
    }

    #[test]
    fn test_missing_fields_never_fail_the_request() {
        let engine = StatementEngine::new();
        let result = engine.parse(&RawDocumentText::from_text("HDFC Bank statement notice"));

        assert_eq!(result.classification.issuer, Some("HDFC Bank"));
        let response = result.to_response();
        assert_eq!(response.card_number, "Not found");
        assert_eq!(response.billing_cycle, "Not found");
        assert_eq!(response.due_date, "Not found");
        assert_eq!(response.total_balance, "Not found");
        assert!(response.transactions.is_empty());
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_assemble_collects_warnings_for_gaps() {
        let result = assemble(
            ClassificationResult::unknown(),
            StatementFields::default(),
            Vec::new(),
        );
        assert_eq!(result.warnings.len(), 6);
    }
}
