//! HTTP status mapping for domain errors.
//!
//! Keeps core/ protocol-agnostic: the error enum lives in core, the
//! translation to status codes and response bodies lives here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::CvScanError;

impl CvScanError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            CvScanError::InvalidDocument(_)
            | CvScanError::InvalidQuery(_)
            | CvScanError::ConfigError(_) => StatusCode::BAD_REQUEST,
            CvScanError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            CvScanError::ExtractionFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CvScanError::StorageError(_)
            | CvScanError::IoError(_)
            | CvScanError::SerdeError(_)
            | CvScanError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for CvScanError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
