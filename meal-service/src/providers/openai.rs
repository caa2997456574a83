//! OpenAI completion provider implementation.
//!
//! Implements text generation against the OpenAI completions API.

use super::{CompletionParams, CompletionProvider, CompletionResponse, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI API base URL.
const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// OpenAI provider configuration.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
}

/// OpenAI completion provider.
pub struct OpenAiCompletionProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiCompletionProvider {
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionProvider {
    async fn complete(
        &self,
        prompt: &str,
        params: &CompletionParams,
    ) -> Result<CompletionResponse, ProviderError> {
        let request = CompletionApiRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let url = format!("{}/completions", OPENAI_API_BASE);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to OpenAI completions API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "OpenAI API error {}: {}",
                status, error_text
            )));
        }

        let api_response: CompletionApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        let text = api_response.choices.first().map(|c| c.text.clone());
        let usage = api_response.usage.unwrap_or_default();

        Ok(CompletionResponse {
            text,
            input_tokens: usage.prompt_tokens.unwrap_or(0),
            output_tokens: usage.completion_tokens.unwrap_or(0),
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "OpenAI API key not configured".to_string(),
            ));
        }

        // List models to verify the API key works
        let url = format!("{}/models", OPENAI_API_BASE);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )))
        }
    }
}

// ============================================================================
// OpenAI API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct CompletionApiRequest {
    model: String,
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct CompletionApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: String,
    #[serde(default)]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct Usage {
    prompt_tokens: Option<i32>,
    completion_tokens: Option<i32>,
}
