use crate::config::IdentitySettings;
use anyhow::Result;
use reqwest::Client;

/// Thin HTTP client for the external identity provider.
pub struct IdentityClient {
    client: Client,
    settings: IdentitySettings,
}

impl IdentityClient {
    pub fn new(settings: IdentitySettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.url
    }

    /// Send a POST request to the identity provider.
    pub async fn post(&self, path: &str, body: serde_json::Value) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.settings.url, path);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                anyhow::anyhow!("HTTP request failed: {}", e)
            })?;

        Ok(response)
    }
}
