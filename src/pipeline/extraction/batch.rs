use std::collections::BTreeMap;

use super::docx::extract_docx_text;
use super::pdf::extract_pdf_text;
use super::types::{Document, DocumentKind};
use super::ExtractionError;

/// Extract raw text from a single document according to its declared kind.
///
/// All failures come back as `ExtractionError` values; nothing panics past
/// this boundary. `Unknown` documents are rejected without opening the bytes.
pub fn extract_document(document: &Document) -> Result<String, ExtractionError> {
    match document.kind {
        DocumentKind::Pdf => extract_pdf_text(&document.bytes),
        DocumentKind::Docx => extract_docx_text(&document.bytes),
        DocumentKind::Unknown => Err(ExtractionError::UnsupportedFormat),
    }
}

/// Runs text extraction over a whole batch, isolating per-document failures.
pub struct DocumentBatchProcessor;

impl DocumentBatchProcessor {
    /// Process every document independently; one failing document never
    /// aborts the rest. The result holds exactly one entry per identifier;
    /// duplicate names overwrite in input order (last-write-wins).
    pub fn process(
        &self,
        documents: &[Document],
    ) -> BTreeMap<String, Result<String, ExtractionError>> {
        let mut results = BTreeMap::new();

        for document in documents {
            let outcome = extract_document(document);
            match &outcome {
                Ok(text) => tracing::info!(
                    document = %document.name,
                    kind = document.kind.as_str(),
                    text_length = text.len(),
                    "extraction complete"
                ),
                Err(e) => tracing::warn!(
                    document = %document.name,
                    kind = document.kind.as_str(),
                    error = %e,
                    "extraction failed"
                ),
            }
            results.insert(document.name.clone(), outcome);
        }

        results
    }
}
