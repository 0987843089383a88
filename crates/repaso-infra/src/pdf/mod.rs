//! PDF text extraction.
//!
//! Thin wrapper over `pdf_extract` so callers never touch the crate
//! directly. Extraction is CPU-bound and synchronous; HTTP handlers run it
//! on a blocking thread.

use std::path::Path;

/// Errors from PDF text extraction.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("failed to extract text from PDF: {0}")]
    Extraction(String),
}

/// Extract the text content of the PDF file at `path`.
pub fn extract_text(path: &Path) -> Result<String, PdfError> {
    pdf_extract::extract_text(path).map_err(|e| PdfError::Extraction(e.to_string()))
}
