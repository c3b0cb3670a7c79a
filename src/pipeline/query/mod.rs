pub mod engine;
pub mod prompt;

pub use engine::*;
pub use prompt::*;

use thiserror::Error;

use crate::llm::CompletionError;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("no analyzed documents available")]
    NoAnalyzedDocuments,

    #[error("{0}")]
    Service(#[from] CompletionError),
}
