//! Core library for credit-card statement parsing.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Issuer classification against configurable profiles
//! - Rule-based field extraction (card number, billing cycle, due
//!   date, total balance)
//! - Bounded transaction table extraction
//!
//! Extraction degrades gracefully: missing fields become explicit
//! placeholders in a partial result, and only unreadable documents or
//! invalid input reject the request.

pub mod error;
pub mod models;
pub mod pdf;
pub mod service;
pub mod statement;

pub use error::{ErrorResponse, InputError, PdfError, Result, StatementError};
pub use models::config::EngineConfig;
pub use models::statement::{
    ClassificationResult, Extracted, ParseResponse, StatementFields, StatementResult,
    TransactionRecord,
};
pub use pdf::{PdfExtractor, PdfTextSource, RawDocumentText};
pub use service::StatementService;
pub use statement::{StatementEngine, StatementParser};
