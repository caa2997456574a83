use crate::AppState;
use askama::Template;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub signed_in: bool,
    pub email: String,
}

pub async fn index(session: Session) -> impl IntoResponse {
    let email: Option<String> = session.get("email").await.unwrap_or(None);

    IndexTemplate {
        signed_in: email.is_some(),
        email: email.unwrap_or_default(),
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// Readiness probe: checks that the completion provider is reachable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.suggestions.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Completion provider not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
