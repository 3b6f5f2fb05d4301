//! Error types and error handling for the cvscan service.
//!
//! This module defines the error types used throughout the
//! application. HTTP status-code mapping is handled in the http
//! adapter module.

use thiserror::Error;

/// Result type alias for cvscan operations
pub type Result<T> = std::result::Result<T, CvScanError>;

/// Main error type for the cvscan service
#[derive(Error, Debug)]
pub enum CvScanError {
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CvScanError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            CvScanError::InvalidDocument(_)
                | CvScanError::InvalidQuery(_)
                | CvScanError::ConfigError(_)
        )
    }

    /// Check if this is a rejected upload media type
    pub fn is_unsupported_media(&self) -> bool {
        matches!(self, CvScanError::UnsupportedContentType(_))
    }

    /// Check if this is a per-file extraction failure
    ///
    /// Extraction failures are recoverable at the boundary: one
    /// unparsable upload must never take the process down.
    pub fn is_unprocessable(&self) -> bool {
        matches!(self, CvScanError::ExtractionFailed(_))
    }
}
