//! Error types for the cardstmt-core library.

use serde::Serialize;
use thiserror::Error;

/// Main error type for the cardstmt library.
///
/// Only boundary failures live here. Extraction gaps (a field or the
/// transaction table not found) are absorbed into a partial result and
/// never surface as errors.
#[derive(Error, Debug)]
pub enum StatementError {
    /// Input rejected before any parsing began.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// The document layer could not decode the bytes.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input validation failures, detected at the boundary before any
/// parsing work is done.
#[derive(Error, Debug)]
pub enum InputError {
    /// Declared media type is not the supported document type.
    #[error("unsupported media type: {0} (only application/pdf is accepted)")]
    UnsupportedMediaType(String),

    /// Payload exceeds the configured size ceiling.
    #[error("document too large: {size} bytes (limit {limit})")]
    Oversized { size: usize, limit: usize },

    /// Empty payload.
    #[error("no document provided")]
    Empty,
}

/// Errors related to PDF decoding.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to parse the PDF structure.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The document decoded but carries no recoverable text.
    #[error("no text could be extracted; the document may be scanned or image-based")]
    NoText,
}

impl StatementError {
    /// HTTP-style status for this rejection, distinct per kind.
    pub fn status(&self) -> u16 {
        match self {
            StatementError::Input(InputError::UnsupportedMediaType(_)) => 415,
            StatementError::Input(InputError::Oversized { .. }) => 413,
            StatementError::Input(InputError::Empty) => 400,
            StatementError::Pdf(_) => 422,
            StatementError::Io(_) => 500,
        }
    }
}

/// Rejection body handed to the transport collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&StatementError> for ErrorResponse {
    fn from(err: &StatementError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Result type for the cardstmt library.
pub type Result<T> = std::result::Result<T, StatementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_are_distinct_per_rejection_kind() {
        let media: StatementError = InputError::UnsupportedMediaType("text/html".into()).into();
        let oversized: StatementError = InputError::Oversized { size: 10, limit: 1 }.into();
        let empty: StatementError = InputError::Empty.into();
        let unreadable: StatementError = PdfError::Parse("bad header".into()).into();

        assert_eq!(media.status(), 415);
        assert_eq!(oversized.status(), 413);
        assert_eq!(empty.status(), 400);
        assert_eq!(unreadable.status(), 422);
    }

    #[test]
    fn test_error_response_carries_message() {
        let err: StatementError = PdfError::Encrypted.into();
        let body = ErrorResponse::from(&err);
        assert!(body.error.contains("encrypted"));
    }
}
