//! Turns an ingredient list into recipe steps via the completion provider.

use crate::providers::{CompletionParams, CompletionProvider};
use std::sync::Arc;

pub struct SuggestionService {
    provider: Arc<dyn CompletionProvider>,
    params: CompletionParams,
}

impl SuggestionService {
    pub fn new(provider: Arc<dyn CompletionProvider>, max_tokens: i32) -> Self {
        Self {
            provider,
            params: CompletionParams {
                max_tokens: Some(max_tokens),
                temperature: None,
            },
        }
    }

    /// Natural-language prompt embedding the user's raw ingredient list.
    fn build_prompt(ingredients: &str) -> String {
        format!(
            "In my fridge I have: {}\n\n\
             What can I make with this? Give me a list with the steps.\n\n",
            ingredients
        )
    }

    /// Ask the provider for recipe steps.
    ///
    /// The completion text is split on newlines and empty lines are
    /// discarded. Any provider failure is logged and mapped to an empty
    /// list; errors never propagate past this seam.
    pub async fn suggest(&self, ingredients: &str) -> Vec<String> {
        let prompt = Self::build_prompt(ingredients);

        match self.provider.complete(&prompt, &self.params).await {
            Ok(response) => {
                let text = response.text.unwrap_or_default();

                tracing::debug!(
                    input_tokens = response.input_tokens,
                    output_tokens = response.output_tokens,
                    "Completion received"
                );

                text.split('\n')
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect()
            }
            Err(e) => {
                tracing::error!(error = %e, "Completion request failed");
                Vec::new()
            }
        }
    }

    pub async fn health_check(&self) -> Result<(), crate::providers::ProviderError> {
        self.provider.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockCompletionProvider;

    fn service(provider: MockCompletionProvider) -> SuggestionService {
        SuggestionService::new(Arc::new(provider), 256)
    }

    #[tokio::test]
    async fn splits_completion_into_non_empty_lines() {
        let svc = service(MockCompletionProvider::with_reply(
            "1. Chop onion\n2. Cook rice\n\n3. Mix",
        ));

        let steps = svc.suggest("rice, tomato, onion").await;

        assert_eq!(steps, vec!["1. Chop onion", "2. Cook rice", "3. Mix"]);
    }

    #[tokio::test]
    async fn never_returns_empty_strings() {
        let svc = service(MockCompletionProvider::with_reply("\n\n\nonly step\n\n"));

        let steps = svc.suggest("bread").await;

        assert_eq!(steps, vec!["only step"]);
        assert!(steps.iter().all(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn blank_completion_yields_empty_list() {
        let svc = service(MockCompletionProvider::with_reply("\n\n"));

        assert!(svc.suggest("water").await.is_empty());
    }

    #[tokio::test]
    async fn provider_failure_yields_empty_list() {
        let svc = service(MockCompletionProvider::failing());

        assert!(svc.suggest("rice, tomato, onion").await.is_empty());
    }

    #[test]
    fn prompt_embeds_raw_ingredient_list() {
        let prompt = SuggestionService::build_prompt("rice, tomato, onion");

        assert!(prompt.contains("rice, tomato, onion"));
        assert!(prompt.contains("list with the steps"));
    }
}
