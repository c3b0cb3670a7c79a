use super::prompt::{build_query_prompt, serialize_records, QUERY_SYSTEM_PROMPT};
use super::QueryError;
use crate::llm::CompletionClient;
use crate::pipeline::report::AnalysisReport;

/// Answers free-text questions over the successful records of a report.
///
/// Stateless across calls: no caching, no memory of prior queries, and the
/// report itself is never mutated.
pub struct QueryEngine<C: CompletionClient> {
    client: C,
}

impl<C: CompletionClient> QueryEngine<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn answer(&self, report: &AnalysisReport, question: &str) -> Result<String, QueryError> {
        if !report.has_records() {
            return Err(QueryError::NoAnalyzedDocuments);
        }

        let context = serialize_records(report);
        let prompt = build_query_prompt(question, &context);

        tracing::info!(
            question_length = question.len(),
            records = report.records().count(),
            "answering query"
        );

        let answer = self.client.complete(QUERY_SYSTEM_PROMPT, &prompt)?;
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockCompletionClient;
    use crate::pipeline::report::{AnalysisFailure, DocumentOutcome, FailureKind};
    use serde_json::json;

    fn report_with_record() -> AnalysisReport {
        let mut report = AnalysisReport::new();
        report.insert(
            "a.pdf".into(),
            DocumentOutcome::Record(json!({"name": "John Doe", "skills": ["Rust", "SQL"]})),
        );
        report
    }

    #[test]
    fn answer_returned_verbatim() {
        let client = MockCompletionClient::new("John Doe knows Rust.");
        let engine = QueryEngine::new(&client);
        let answer = engine.answer(&report_with_record(), "Who knows Rust?").unwrap();
        assert_eq!(answer, "John Doe knows Rust.");
    }

    #[test]
    fn prompt_carries_question_and_records() {
        let client = MockCompletionClient::new("answer");
        let engine = QueryEngine::new(&client);
        engine.answer(&report_with_record(), "Who knows Rust?").unwrap();

        let (system, user) = client.last_prompt().unwrap();
        assert_eq!(system, QUERY_SYSTEM_PROMPT);
        assert!(user.contains("Who knows Rust?"));
        assert!(user.contains("a.pdf:"));
        assert!(user.contains("John Doe"));
    }

    #[test]
    fn empty_report_fails_without_service_call() {
        let client = MockCompletionClient::new("should never be sent");
        let engine = QueryEngine::new(&client);
        let err = engine.answer(&AnalysisReport::new(), "anything").unwrap_err();

        assert!(matches!(err, QueryError::NoAnalyzedDocuments));
        assert_eq!(err.to_string(), "no analyzed documents available");
        assert_eq!(client.calls(), 0, "precondition check must run first");
    }

    #[test]
    fn report_with_only_failures_fails_precondition() {
        let client = MockCompletionClient::new("unused");
        let engine = QueryEngine::new(&client);

        let mut report = AnalysisReport::new();
        report.insert(
            "bad.docx".into(),
            DocumentOutcome::Error(AnalysisFailure::new(
                FailureKind::Service,
                "connection refused",
            )),
        );

        let err = engine.answer(&report, "anything").unwrap_err();
        assert!(matches!(err, QueryError::NoAnalyzedDocuments));
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn service_failure_surfaces_message() {
        let client = MockCompletionClient::failing("quota exceeded");
        let engine = QueryEngine::new(&client);
        let err = engine.answer(&report_with_record(), "question").unwrap_err();
        assert!(matches!(err, QueryError::Service(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn query_failure_leaves_report_intact() {
        let client = MockCompletionClient::failing("boom");
        let engine = QueryEngine::new(&client);
        let report = report_with_record();
        let before = report.clone();

        let _ = engine.answer(&report, "question");
        assert_eq!(report, before);
    }
}
