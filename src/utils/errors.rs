//! Error handling for CharityConnect
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for CharityConnect operations
#[derive(Error, Debug)]
pub enum CharityConnectError {
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Document not found: {collection}/{id}")]
    DocumentNotFound { collection: String, id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for CharityConnect operations
pub type Result<T> = std::result::Result<T, CharityConnectError>;

impl CharityConnectError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            CharityConnectError::Store(_) => true,
            CharityConnectError::Serialization(_) => false,
            CharityConnectError::Config(_) => false,
            CharityConnectError::DocumentNotFound { .. } => false,
            CharityConnectError::InvalidInput(_) => false,
            CharityConnectError::Io(_) => true,
            CharityConnectError::UrlParse(_) => false,
            CharityConnectError::ServiceUnavailable(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_not_found_display() {
        let err = CharityConnectError::DocumentNotFound {
            collection: "ngos".to_string(),
            id: "n1".to_string(),
        };
        assert_eq!(err.to_string(), "Document not found: ngos/n1");
        assert!(!err.is_recoverable());
    }
}
