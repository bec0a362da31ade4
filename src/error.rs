//! Error types for document handling.
//!
//! Only the document model can fail: a payload handed over by the REST client
//! may be malformed JSON for the expected record shape. Token verification
//! itself never errors — every input maps to a boolean verdict, and a
//! malformed document is indistinguishable from a tampered one by design.

use thiserror::Error;

/// Errors raised while turning raw service payloads into typed documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The payload was not a JSON object of the expected shape, or a present
    /// field had the wrong type.
    #[error("invalid document payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = DocumentError::from(cause);
        assert!(err.to_string().starts_with("invalid document payload:"));
    }
}
