//! Error types for the Auditor

use thiserror::Error;

/// Reasons an input is refused before parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Input exceeds the configured size ceiling
    #[error("file too large: {0} bytes (max: {1})")]
    TooLarge(usize, usize),

    /// Input is not a PDF document
    #[error("not a PDF document")]
    NotPdf,

    /// Document is password-protected
    #[error("document is encrypted or password-protected")]
    Encrypted,

    /// Document has no extractable text (image-only scan)
    #[error("document has no extractable text; scanned images are not supported")]
    NoExtractableText,
}

/// Errors that can occur during an audit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// Input refused before parsing
    #[error("Input rejected: {0}")]
    InputRejected(#[from] Rejection),

    /// Page text extraction failed for an unanticipated reason
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuditError {
    /// True for the anticipated input rejections
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuditError::InputRejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let err = AuditError::from(Rejection::TooLarge(20, 10));
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "Input rejected: file too large: 20 bytes (max: 10)");

        let err = AuditError::Extraction("bad xref".to_string());
        assert!(!err.is_rejection());
    }
}
