pub mod config;
pub mod llm;
pub mod pipeline;

pub use config::LlmConfig;
pub use llm::{CompletionClient, CompletionError, MockCompletionClient, OpenAiClient};
pub use pipeline::analysis::AnalysisPipeline;
pub use pipeline::extraction::{Document, DocumentKind};
pub use pipeline::query::QueryEngine;
pub use pipeline::report::{AnalysisFailure, AnalysisReport, DocumentOutcome, FailureKind};
pub use pipeline::structuring::StructuringEngine;
