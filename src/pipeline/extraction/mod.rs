pub mod batch;
pub mod docx;
pub mod pdf;
pub mod types;

pub use batch::*;
pub use docx::*;
pub use pdf::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("DOCX parsing failed: {0}")]
    DocxParsing(String),

    #[error("no extractable text")]
    NoText,

    #[error("unsupported file format")]
    UnsupportedFormat,
}
