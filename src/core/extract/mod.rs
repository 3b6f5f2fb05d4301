//! Text extraction for uploaded resume files.
//!
//! Dispatches on the upload's MIME type and produces the plain-text
//! body that the repository stores and the search engine scans. An
//! unparsable file is an error value for that one upload, never a
//! fault that aborts the service.

mod docx;
mod pdf;

use crate::core::error::{CvScanError, Result};

/// MIME type of PDF uploads
pub const PDF_MIME: &str = "application/pdf";

/// MIME type of DOCX uploads
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Content types the upload boundary accepts
pub const ACCEPTED_CONTENT_TYPES: [&str; 2] = [PDF_MIME, DOCX_MIME];

/// Whether a content type is one of the accepted upload formats
pub fn is_supported(content_type: &str) -> bool {
    ACCEPTED_CONTENT_TYPES.contains(&content_type)
}

/// Extract the plain-text body of an uploaded file
///
/// The content type decides the parser. Extraction makes no
/// guarantee about the result being non-blank; that check belongs
/// to the boundary, since a scanned-image PDF can legitimately
/// parse to nothing.
pub fn extract_text(bytes: &[u8], content_type: &str) -> Result<String> {
    match content_type {
        PDF_MIME => pdf::extract(bytes),
        DOCX_MIME => docx::extract(bytes),
        other => Err(CvScanError::UnsupportedContentType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_content_types() {
        assert!(is_supported(PDF_MIME));
        assert!(is_supported(DOCX_MIME));
        assert!(!is_supported("text/plain"));
        assert!(!is_supported("image/png"));
    }

    #[test]
    fn test_unsupported_type_is_rejected() {
        let result = extract_text(b"anything", "text/html");

        assert!(matches!(
            result,
            Err(CvScanError::UnsupportedContentType(_))
        ));
    }

    #[test]
    fn test_garbage_pdf_fails_extraction() {
        let result = extract_text(b"definitely not a pdf", PDF_MIME);

        assert!(matches!(result, Err(CvScanError::ExtractionFailed(_))));
    }

    #[test]
    fn test_garbage_docx_fails_extraction() {
        let result = extract_text(b"definitely not a zip archive", DOCX_MIME);

        assert!(matches!(result, Err(CvScanError::ExtractionFailed(_))));
    }

    #[test]
    fn test_docx_round_trip() {
        use docx_rs::{Docx, Paragraph, Run};

        let mut buf = std::io::Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Seven years of Rust")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Two years of Go")))
            .build()
            .pack(&mut buf)
            .unwrap();

        let text = extract_text(buf.get_ref(), DOCX_MIME).unwrap();

        assert!(text.contains("Seven years of Rust"));
        assert!(text.contains("Two years of Go"));
    }
}
