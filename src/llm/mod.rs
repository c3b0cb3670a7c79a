pub mod client;
pub mod mock;
pub mod openai;

pub use client::*;
pub use mock::*;
pub use openai::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("cannot reach completion service at {0}")]
    Connection(String),

    #[error("completion request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("completion service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    ResponseParsing(String),

    #[error("completion response contained no choices")]
    NoChoices,
}
