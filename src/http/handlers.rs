//! HTTP request handlers for the cvscan API
//!
//! Implements handlers for all 5 REST endpoints: health, upload,
//! search, list documents, and clear documents.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};

use crate::core::error::CvScanError;
use crate::core::extract;
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Upload handler
///
/// Accepts a multipart form with a `file` field, extracts the text
/// of the PDF/DOCX payload, and stores the resulting document.
///
/// # Returns
///
/// The stored document (with assigned id and timestamp) on success
///
/// # Errors
///
/// - `InvalidDocument`: no `file` field, unreadable form data, or
///   extraction produced only whitespace
/// - `UnsupportedContentType`: payload is neither PDF nor DOCX
/// - `ExtractionFailed`: payload could not be parsed
pub async fn upload_handler(
    State(services): State<Arc<Services>>,
    mut multipart: Multipart,
) -> Result<Json<Document>, CvScanError> {
    let mut upload: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| CvScanError::InvalidDocument(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| CvScanError::InvalidDocument(format!("Failed to read upload: {e}")))?;

        upload = Some((filename, content_type, bytes.to_vec()));
        break;
    }

    let (filename, content_type, bytes) =
        upload.ok_or_else(|| CvScanError::InvalidDocument("No file uploaded".to_string()))?;

    if !extract::is_supported(&content_type) {
        return Err(CvScanError::UnsupportedContentType(content_type));
    }

    let extracted_text = extract::extract_text(&bytes, &content_type)?;

    if extracted_text.trim().is_empty() {
        return Err(CvScanError::InvalidDocument(
            "Document contains no extractable text".to_string(),
        ));
    }

    tracing::info!(
        filename = %filename,
        content_type = %content_type,
        bytes = bytes.len(),
        text_len = extracted_text.len(),
        "Resume extracted"
    );

    let document = services
        .store
        .insert(DocumentDraft {
            filename,
            content_type,
            extracted_text,
        })
        .await?;

    Ok(Json(document))
}

/// Search handler
///
/// Ranks stored documents by keyword occurrence counts.
///
/// # Returns
///
/// Matching documents best-first, with count and duration
///
/// # Errors
///
/// - `InvalidQuery`: keyword set is empty/blank or exceeds limits
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, CvScanError> {
    let response = services.search.search(req).await?;

    Ok(Json(response))
}

/// List documents handler
///
/// Returns every stored document, unranked. This is the explicit
/// list-all mode; an empty keyword set on the search endpoint is an
/// error, not a listing.
pub async fn list_documents_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<DocumentsResponse>, CvScanError> {
    let documents = services.store.list_all().await?;

    Ok(Json(DocumentsResponse { documents }))
}

/// Clear documents handler
///
/// Removes every stored document and resets identity assignment.
/// Destructive; any confirmation step is the client's concern.
pub async fn clear_documents_handler(
    State(services): State<Arc<Services>>,
) -> Result<Json<ClearResponse>, CvScanError> {
    let cleared = services.store.clear_all().await?;

    Ok(Json(ClearResponse {
        status: "cleared".to_string(),
        cleared,
    }))
}
