//! Configuration structures for the statement engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main configuration for the statement pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Input boundary configuration.
    pub input: InputConfig,

    /// Issuer classification configuration.
    pub classifier: ClassifierConfig,

    /// Field and transaction extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            classifier: ClassifierConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Input boundary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum accepted document size in bytes.
    pub max_document_bytes: usize,

    /// Accepted media type for uploaded documents.
    pub media_type: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: 8 * 1024 * 1024,
            media_type: "application/pdf".to_string(),
        }
    }
}

/// Issuer classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum keyword score for a known classification; below this the
    /// result is Unknown.
    pub min_score: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { min_score: 1 }
    }
}

/// Field and transaction extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of transactions returned; parsing order is kept
    /// and the list is truncated past this.
    pub max_transactions: usize,

    /// Smallest plausible total-balance amount (inclusive).
    pub min_amount: Decimal,

    /// Largest plausible total-balance amount (inclusive).
    pub max_amount: Decimal,

    /// Exclusive lower bound for transaction row amounts.
    pub txn_min_amount: Decimal,

    /// Exclusive upper bound for transaction row amounts.
    pub txn_max_amount: Decimal,

    /// Minimum description length for a row to count as a transaction,
    /// used when the issuer's table spec does not set its own.
    pub min_description_len: usize,

    /// Maximum description length kept per transaction.
    pub max_description_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_transactions: 10,
            min_amount: Decimal::new(1, 2),
            max_amount: Decimal::from(100_000_000),
            txn_min_amount: Decimal::new(1, 2),
            txn_max_amount: Decimal::from(10_000_000),
            min_description_len: 4,
            max_description_len: 80,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.input.media_type, "application/pdf");
        assert_eq!(config.extraction.max_transactions, 10);
        assert_eq!(config.extraction.min_amount, Decimal::from_str("0.01").unwrap());
        assert_eq!(config.extraction.max_amount, Decimal::from(100_000_000));
        assert_eq!(config.extraction.txn_max_amount, Decimal::from(10_000_000));
        assert_eq!(config.classifier.min_score, 1);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"extraction": {"max_transactions": 5}}"#).unwrap();
        assert_eq!(config.extraction.max_transactions, 5);
        assert_eq!(config.extraction.max_description_len, 80);
        assert_eq!(config.input.max_document_bytes, 8 * 1024 * 1024);
    }
}
