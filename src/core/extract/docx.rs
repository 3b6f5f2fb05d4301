//! DOCX text extraction.
//!
//! A .docx file is a ZIP archive of XML parts. `docx-rs` parses it
//! into a typed tree; the text lives on the leaves of
//! Document -> Paragraph -> Run. Paragraph text is collected via
//! `raw_text`, blank paragraphs (section breaks, spacer lines) are
//! skipped, and the rest join with newlines into one body.

use docx_rs::{read_docx, DocumentChild};

use crate::core::error::{CvScanError, Result};

/// Extract the text body of a DOCX file held in memory
pub(crate) fn extract(bytes: &[u8]) -> Result<String> {
    let docx = read_docx(bytes)
        .map_err(|e| CvScanError::ExtractionFailed(format!("DOCX parse error: {e:?}")))?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        // Tables, images and bookmarks carry no searchable text here
        if let DocumentChild::Paragraph(paragraph) = child {
            let text = paragraph.raw_text();
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}
