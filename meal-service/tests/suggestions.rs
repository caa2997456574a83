//! Integration tests for the suggestion endpoint.
//!
//! Spawns the app on a random port with a mock completion provider and a
//! stubbed identity provider, then drives it with a cookie-carrying client
//! the way a browser session would.

use axum::{http::StatusCode, routing::post, Json, Router};
use meal_service::config::IdentitySettings;
use meal_service::models::suggestion::SuggestionResponse;
use meal_service::providers::mock::MockCompletionProvider;
use meal_service::services::identity_client::IdentityClient;
use meal_service::services::suggestions::SuggestionService;
use meal_service::startup::build_router;
use meal_service::AppState;
use serde_json::json;
use std::sync::Arc;

/// Spawn a stub identity provider that accepts any credentials.
async fn spawn_identity_stub() -> String {
    let app = Router::new()
        .route(
            "/auth/login",
            post(|| async { Json(json!({ "access_token": "test-token" })) }),
        )
        .route("/auth/logout", post(|| async { StatusCode::OK }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind identity stub");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Spawn the application on a random port and return its base URL.
async fn spawn_app(provider: Arc<MockCompletionProvider>) -> String {
    let identity_url = spawn_identity_stub().await;

    let state = AppState::new(
        Arc::new(IdentityClient::new(IdentitySettings { url: identity_url })),
        Arc::new(SuggestionService::new(provider, 256)),
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind app listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Sign in through the login form so the client's cookie jar carries a
/// session.
async fn sign_in(client: &reqwest::Client, base_url: &str) {
    let response = client
        .post(format!("{}/login", base_url))
        .form(&[("email", "cook@example.com"), ("password", "hunter2")])
        .send()
        .await
        .expect("Failed to execute login request");

    // Redirects to the index page on success
    assert_eq!(response.status(), StatusCode::OK);
}

fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
async fn anonymous_call_is_rejected_without_touching_the_provider() {
    let provider = Arc::new(MockCompletionProvider::with_reply("1. Step"));
    let base_url = spawn_app(provider.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/suggestions", base_url))
        .json(&json!({ "text": "rice, tomato, onion" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn signed_in_user_gets_steps_split_on_newlines() {
    let provider = Arc::new(MockCompletionProvider::with_reply(
        "1. Chop onion\n2. Cook rice\n\n3. Mix",
    ));
    let base_url = spawn_app(provider.clone()).await;

    let client = session_client();
    sign_in(&client, &base_url).await;

    let response = client
        .post(format!("{}/api/suggestions", base_url))
        .json(&json!({ "text": "rice, tomato, onion" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: SuggestionResponse = response.json().await.expect("Invalid response body");
    assert_eq!(body.steps, vec!["1. Chop onion", "2. Cook rice", "3. Mix"]);
    assert!(body.steps.iter().all(|s| !s.is_empty()));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn provider_failure_yields_empty_steps_not_an_error() {
    let provider = Arc::new(MockCompletionProvider::failing());
    let base_url = spawn_app(provider.clone()).await;

    let client = session_client();
    sign_in(&client, &base_url).await;

    let response = client
        .post(format!("{}/api/suggestions", base_url))
        .json(&json!({ "text": "rice, tomato, onion" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: SuggestionResponse = response.json().await.expect("Invalid response body");
    assert!(body.steps.is_empty());
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn empty_ingredient_list_is_rejected() {
    let provider = Arc::new(MockCompletionProvider::with_reply("1. Step"));
    let base_url = spawn_app(provider.clone()).await;

    let client = session_client();
    sign_in(&client, &base_url).await;

    let response = client
        .post(format!("{}/api/suggestions", base_url))
        .json(&json!({ "text": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn logout_clears_the_session() {
    let provider = Arc::new(MockCompletionProvider::with_reply("1. Step"));
    let base_url = spawn_app(provider.clone()).await;

    let client = session_client();
    sign_in(&client, &base_url).await;

    let response = client
        .get(format!("{}/logout", base_url))
        .send()
        .await
        .expect("Failed to execute logout request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(format!("{}/api/suggestions", base_url))
        .json(&json!({ "text": "rice" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(provider.calls(), 0);
}
