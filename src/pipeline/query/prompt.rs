use crate::pipeline::report::AnalysisReport;

pub const QUERY_SYSTEM_PROMPT: &str = "You are an AI assistant for analyzing CVs. \
Answer questions using only the structured CV data provided in the message.";

/// Serialize every successful `{id: record}` pair into a human-readable
/// context block: the identifier followed by its pretty-printed record.
/// Failed entries are excluded.
pub fn serialize_records(report: &AnalysisReport) -> String {
    report
        .records()
        .map(|(id, record)| {
            let pretty = serde_json::to_string_pretty(record)
                .unwrap_or_else(|_| record.to_string());
            format!("{id}:\n{pretty}")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the user message combining the question with the serialized records.
pub fn build_query_prompt(question: &str, serialized_records: &str) -> String {
    format!(
        "From this structured CV data, answer this query: {question}\n\n{serialized_records}"
    )
}
