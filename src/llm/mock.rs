use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::client::CompletionClient;
use super::CompletionError;

/// Mock completion client for testing — returns a configurable reply or
/// failure, counts calls, and captures the last prompt pair it received.
pub struct MockCompletionClient {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<(String, String)>>,
}

impl MockCompletionClient {
    /// A client that answers every call with `reply`.
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// A client that fails every call with a transport error.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Number of `complete` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The (system, user) pair of the most recent call, if any.
    pub fn last_prompt(&self) -> Option<(String, String)> {
        self.last_prompt.lock().unwrap().clone()
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some((system.to_string(), user.to_string()));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(CompletionError::Transport(message.clone())),
        }
    }
}
