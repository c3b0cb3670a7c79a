use super::extraction::{Document, DocumentBatchProcessor};
use super::report::{AnalysisFailure, AnalysisReport, DocumentOutcome};
use super::structuring::StructuringEngine;
use crate::llm::CompletionClient;

/// Orchestrates one batch run: extraction, then per-document structuring,
/// assembled into a fresh report.
///
/// Documents are processed sequentially and independently; a failure at
/// either stage becomes that document's report entry and never disturbs the
/// other documents.
pub struct AnalysisPipeline<C: CompletionClient> {
    batch: DocumentBatchProcessor,
    structuring: StructuringEngine<C>,
}

impl<C: CompletionClient> AnalysisPipeline<C> {
    pub fn new(client: C) -> Self {
        Self {
            batch: DocumentBatchProcessor,
            structuring: StructuringEngine::new(client),
        }
    }

    /// Run the full pipeline over one batch. The report holds exactly one
    /// entry per input identifier; extraction failures are propagated
    /// directly, without a completion-service call.
    pub fn run(&self, documents: &[Document]) -> AnalysisReport {
        tracing::info!(batch_size = documents.len(), "starting batch analysis");

        let extracted = self.batch.process(documents);
        let mut report = AnalysisReport::new();

        for (id, extraction) in extracted {
            let outcome = match extraction {
                Ok(text) => match self.structuring.structure(&text) {
                    Ok(record) => {
                        tracing::info!(document = %id, "structuring complete");
                        DocumentOutcome::Record(record)
                    }
                    Err(e) => {
                        tracing::warn!(document = %id, error = %e, "structuring failed");
                        DocumentOutcome::Error(AnalysisFailure::from(&e))
                    }
                },
                Err(e) => DocumentOutcome::Error(AnalysisFailure::from(&e)),
            };
            report.insert(id, outcome);
        }

        tracing::info!(
            entries = report.len(),
            successes = report.records().count(),
            "batch analysis complete"
        );

        report
    }
}
