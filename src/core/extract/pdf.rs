//! PDF text extraction.

use crate::core::error::{CvScanError, Result};

/// Extract the text body of a PDF file held in memory
pub(crate) fn extract(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| CvScanError::ExtractionFailed(format!("PDF parse error: {e}")))
}
