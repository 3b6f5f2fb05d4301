//! Core data types for the cvscan service.
//!
//! This module defines all data structures used throughout the
//! application, including stored documents, search requests, and
//! API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored, immutable record of one ingested resume
///
/// Identity and timestamp are assigned by the repository at insert
/// time; every other field is stored exactly as supplied by the
/// caller (filenames are not normalized).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique, strictly increasing identifier (first id is 1)
    pub id: u64,

    /// Original uploaded filename, preserved verbatim
    pub filename: String,

    /// MIME type of the uploaded file (metadata only)
    pub content_type: String,

    /// Full text produced by extraction, never blank
    pub extracted_text: String,

    /// Insertion timestamp, assigned by the repository
    pub uploaded_at: DateTime<Utc>,
}

/// Insert candidate for a document
///
/// What the upload boundary hands to the repository: everything a
/// [`Document`] carries except the repository-assigned fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDraft {
    /// Original uploaded filename
    pub filename: String,

    /// MIME type of the uploaded file
    pub content_type: String,

    /// Extracted text body
    pub extracted_text: String,
}

/// Request to rank stored documents against keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Keywords to count; at least one non-blank entry is required
    pub keywords: Vec<String>,
}

/// Response from a ranked search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Keywords the ranking was computed from, as received
    pub keywords: Vec<String>,

    /// Matching documents, best score first
    pub results: Vec<Document>,

    /// Number of results returned
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

/// Response from listing every stored document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsResponse {
    /// All stored documents, unranked
    pub documents: Vec<Document>,
}

/// Response from clearing the repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearResponse {
    /// Status message
    pub status: String,

    /// Number of documents that were removed
    pub cleared: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
