//! Completion provider abstractions and implementations.
//!
//! This module provides a trait-based abstraction over external
//! text-completion APIs, allowing the real backend (OpenAI) to be swapped
//! for a mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a completion call.
pub struct CompletionResponse {
    /// Raw completion text, if the API produced any.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

/// Generation parameters for completion requests.
#[derive(Debug, Clone, Default)]
pub struct CompletionParams {
    /// Maximum output tokens.
    pub max_tokens: Option<i32>,

    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,
}

/// Trait for text-completion providers (e.g., OpenAI).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Request a completion for the given prompt.
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<CompletionResponse, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
