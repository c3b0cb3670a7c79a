use super::ExtractionError;

/// Extract paragraph text from a DOCX file using docx-rs.
///
/// Run texts are concatenated within each paragraph; paragraphs are joined in
/// document order with a newline. Table content is not traversed. An empty
/// result after trimming yields `NoText`.
pub fn extract_docx_text(docx_bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = docx_rs::read_docx(docx_bytes)
        .map_err(|e| ExtractionError::DocxParsing(e.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            line.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }

    let text = paragraphs.join("\n");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::NoText);
    }

    Ok(trimmed.to_string())
}
