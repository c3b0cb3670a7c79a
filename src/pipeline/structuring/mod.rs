pub mod engine;
pub mod parser;
pub mod prompt;

pub use engine::*;
pub use parser::*;
pub use prompt::*;

use thiserror::Error;

use crate::llm::CompletionError;

#[derive(Error, Debug)]
pub enum StructuringError {
    #[error("{0}")]
    Service(#[from] CompletionError),

    #[error("empty response")]
    EmptyResponse,

    #[error("response was not valid JSON: {0}")]
    InvalidJson(String),
}
