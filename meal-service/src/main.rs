use dotenvy::dotenv;
use meal_service::config::get_configuration;
use meal_service::providers::openai::{OpenAiCompletionProvider, OpenAiConfig};
use meal_service::providers::CompletionProvider;
use meal_service::services::identity_client::IdentityClient;
use meal_service::services::suggestions::SuggestionService;
use meal_service::startup::build_router;
use meal_service::AppState;
use secrecy::ExposeSecret;
use service_core::observability::init_tracing;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("meal-service", "info");

    meal_service::services::metrics::init_metrics();

    let identity_client = Arc::new(IdentityClient::new(configuration.identity_service.clone()));

    let provider: Arc<dyn CompletionProvider> = Arc::new(OpenAiCompletionProvider::new(
        OpenAiConfig {
            api_key: configuration.openai.api_key.expose_secret().clone(),
            model: configuration.openai.model.clone(),
        },
    ));
    info!(
        model = %configuration.openai.model,
        "Initialized OpenAI completion provider"
    );

    let suggestions = Arc::new(SuggestionService::new(
        provider,
        configuration.openai.max_tokens,
    ));

    let app = build_router(AppState::new(identity_client, suggestions));

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting meal-service on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
