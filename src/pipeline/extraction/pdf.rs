use super::ExtractionError;

/// Extract the text layer of a digital PDF using the pdf-extract crate.
///
/// Page texts are concatenated in page order, separated by a newline. A PDF
/// whose pages carry no selectable text yields `NoText`, never an empty string.
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let page_texts = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

    let text = page_texts.join("\n");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::NoText);
    }

    Ok(trimmed.to_string())
}
