use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::extraction::ExtractionError;
use super::structuring::StructuringError;

/// Failure category, so callers branch on kind instead of parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Unreadable or unsupported document, or no text found.
    Extraction,
    /// The completion-service call itself failed.
    Service,
    /// The service replied but the reply was empty or not valid JSON.
    Format,
    /// A query was submitted with zero successfully analyzed documents.
    QueryPrecondition,
}

/// A per-document or per-query failure: an explicit kind plus the
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalysisFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&ExtractionError> for AnalysisFailure {
    fn from(e: &ExtractionError) -> Self {
        Self::new(FailureKind::Extraction, e.to_string())
    }
}

impl From<&StructuringError> for AnalysisFailure {
    fn from(e: &StructuringError) -> Self {
        let kind = match e {
            StructuringError::Service(_) => FailureKind::Service,
            StructuringError::EmptyResponse | StructuringError::InvalidJson(_) => {
                FailureKind::Format
            }
        };
        Self::new(kind, e.to_string())
    }
}

/// Outcome for one document in a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentOutcome {
    /// The structured record the model produced — any valid JSON value,
    /// deliberately not schema-validated.
    Record(serde_json::Value),
    Error(AnalysisFailure),
}

impl DocumentOutcome {
    pub fn record(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Record(value) => Some(value),
            Self::Error(_) => None,
        }
    }
}

/// Mapping from document identifier to structured record or failure,
/// covering one full batch run. Every input identifier appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisReport {
    pub entries: BTreeMap<String, DocumentOutcome>,
}

impl AnalysisReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, outcome: DocumentOutcome) {
        self.entries.insert(id, outcome);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DocumentOutcome> {
        self.entries.get(id)
    }

    /// Successful `(id, record)` pairs, in identifier order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.entries
            .iter()
            .filter_map(|(id, outcome)| outcome.record().map(|r| (id.as_str(), r)))
    }

    /// Whether at least one document was analyzed successfully.
    pub fn has_records(&self) -> bool {
        self.records().next().is_some()
    }
}
