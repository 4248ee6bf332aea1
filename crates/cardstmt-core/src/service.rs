//! Boundary service consumed by the transport collaborator.
//!
//! Validates the upload before any parsing, decodes the document, and
//! runs the pipeline. Once text is recovered the request always
//! produces a response; only unreadable documents and invalid input
//! are rejected.

use tracing::{debug, info};

use crate::error::{InputError, PdfError, Result};
use crate::models::config::EngineConfig;
use crate::models::statement::ParseResponse;
use crate::pdf::{PdfExtractor, PdfTextSource, RawDocumentText};
use crate::statement::{StatementEngine, StatementParser};

/// Statement parsing service: one instance serves any number of
/// concurrent requests; no state is shared between them.
pub struct StatementService {
    engine: StatementEngine,
}

impl StatementService {
    pub fn new() -> Self {
        Self {
            engine: StatementEngine::new(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: StatementEngine::with_config(config),
        }
    }

    /// Validate and parse one uploaded document.
    pub fn parse(&self, document: &[u8], media_type: &str) -> Result<ParseResponse> {
        let input = &self.engine.config().input;

        if document.is_empty() {
            return Err(InputError::Empty.into());
        }
        if document.len() > input.max_document_bytes {
            return Err(InputError::Oversized {
                size: document.len(),
                limit: input.max_document_bytes,
            }
            .into());
        }
        let declared = media_type.split(';').next().unwrap_or("").trim();
        if !declared.eq_ignore_ascii_case(&input.media_type) {
            return Err(InputError::UnsupportedMediaType(media_type.to_string()).into());
        }

        let mut extractor = PdfExtractor::new();
        extractor.load(document)?;
        let text = extractor.extract_lines()?;
        if text.is_blank() {
            return Err(PdfError::NoText.into());
        }
        debug!(
            "extracted {} lines from {} pages",
            text.len(),
            extractor.page_count()
        );

        info!("document accepted, running extraction pipeline");
        Ok(self.engine.parse(&text).to_response())
    }

    /// Parse already-extracted statement text, bypassing the document
    /// layer.
    pub fn parse_text(&self, text: &str) -> ParseResponse {
        let document = RawDocumentText::from_text(text);
        self.engine.parse(&document).to_response()
    }
}

impl Default for StatementService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatementError;

    #[test]
    fn test_empty_input_is_rejected() {
        let service = StatementService::new();
        let err = service.parse(&[], "application/pdf").unwrap_err();
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_oversized_input_is_rejected_before_any_extraction() {
        let mut config = EngineConfig::default();
        config.input.max_document_bytes = 16;
        let service = StatementService::with_config(config);

        // not a PDF at all: the size check must fire first
        let err = service.parse(&[0u8; 64], "application/pdf").unwrap_err();
        assert!(matches!(err, StatementError::Input(_)));
        assert_eq!(err.status(), 413);
    }

    #[test]
    fn test_wrong_media_type_is_rejected() {
        let service = StatementService::new();
        let err = service.parse(b"%PDF-1.4", "text/html").unwrap_err();
        assert_eq!(err.status(), 415);
    }

    #[test]
    fn test_media_type_parameters_are_ignored() {
        let service = StatementService::new();
        // passes the media-type check, fails later as unreadable
        let err = service
            .parse(b"garbage", "application/pdf; charset=binary")
            .unwrap_err();
        assert!(matches!(err, StatementError::Pdf(_)));
    }

    #[test]
    fn test_unreadable_document_is_a_distinct_rejection() {
        let service = StatementService::new();
        let err = service
            .parse(b"not a pdf at all", "application/pdf")
            .unwrap_err();
        assert!(matches!(err, StatementError::Pdf(_)));
        assert_eq!(err.status(), 422);
    }

    #[test]
    fn test_parse_text_runs_the_full_pipeline() {
        let service = StatementService::new();
        let response = service.parse_text(
            "HDFC Bank Credit Card Statement\nPayment Due Date: 15/02/2024",
        );
        assert_eq!(response.issuer, "HDFC Bank");
        assert_eq!(response.due_date, "15/02/2024");
        assert_eq!(response.card_number, "Not found");
    }
}
