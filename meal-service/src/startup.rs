use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::tracing::request_id_middleware;
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::handlers::{
    app::{health_check, index, readiness_check},
    auth::{login_handler, login_page, logout_handler},
    suggestions::create_suggestion,
};
use crate::services::metrics::metrics_middleware;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    // Session setup
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(crate::handlers::metrics::metrics))
        .route("/login", get(login_page).post(login_handler))
        .route("/logout", get(logout_handler))
        .route("/api/suggestions", post(create_suggestion))
        .layer(session_layer)
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
