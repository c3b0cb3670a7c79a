use std::path::Path;

use serde::{Deserialize, Serialize};

/// Declared document kind, derived from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unknown,
}

impl DocumentKind {
    /// Derive the kind from a filename, case-insensitively.
    /// Anything other than `.pdf`/`.docx` is `Unknown`.
    pub fn from_filename(name: &str) -> Self {
        match name.rsplit('.').next().map(|ext| ext.to_ascii_lowercase()) {
            Some(ext) if ext == "pdf" => Self::Pdf,
            Some(ext) if ext == "docx" => Self::Docx,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Unknown => "unknown",
        }
    }
}

/// One uploaded document: the filename doubles as the batch identifier.
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            kind: DocumentKind::from_filename(name),
            bytes,
        }
    }

    /// Load a document from disk; the file name becomes the identifier.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = std::fs::read(path)?;
        Ok(Self::new(&name, bytes))
    }
}
