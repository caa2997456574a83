//! Mock provider implementation for testing.

use super::{CompletionParams, CompletionProvider, CompletionResponse, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock completion provider for testing.
///
/// Returns a scripted reply (or a scripted failure) and counts how many
/// times it was invoked, so tests can assert that no outbound call was
/// attempted.
pub struct MockCompletionProvider {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl MockCompletionProvider {
    /// A provider that answers every prompt with the given text.
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider that fails every call with a network error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completion calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        prompt: &str,
        _params: &CompletionParams,
    ) -> Result<CompletionResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            Some(text) => Ok(CompletionResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
            }),
            None => Err(ProviderError::NetworkError(
                "mock network failure".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.reply.is_some() {
            Ok(())
        } else {
            Err(ProviderError::NetworkError(
                "mock network failure".to_string(),
            ))
        }
    }
}
