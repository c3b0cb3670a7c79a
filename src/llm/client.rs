use super::CompletionError;

/// Completion-service abstraction: one text-in/text-out round trip per call.
///
/// Both the structuring and query engines go through this seam, so tests can
/// substitute `MockCompletionClient` and count calls.
pub trait CompletionClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError>;
}

impl<T: CompletionClient + ?Sized> CompletionClient for &T {
    fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        (**self).complete(system, user)
    }
}
