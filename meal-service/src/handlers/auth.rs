use crate::AppState;
use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login_page() -> impl IntoResponse {
    LoginTemplate {
        error: String::new(),
    }
}

pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<LoginRequest>,
) -> impl IntoResponse {
    let response = state
        .identity_client
        .post(
            "/auth/login",
            serde_json::json!({
                "email": payload.email,
                "password": payload.password,
            }),
        )
        .await;

    match response {
        Ok(res) if res.status().is_success() => {
            let tokens: serde_json::Value = res.json().await.unwrap_or_default();
            let access_token = tokens["access_token"].as_str().unwrap_or_default();

            if access_token.is_empty() {
                tracing::error!("Identity provider response carried no access token");
                return (
                    StatusCode::BAD_GATEWAY,
                    LoginTemplate {
                        error: "Sign-in is unavailable right now.".to_string(),
                    },
                )
                    .into_response();
            }

            // Store the token and user context for later requests
            session.insert("access_token", access_token).await.unwrap();
            session.insert("email", &payload.email).await.unwrap();

            tracing::info!(email = %payload.email, "User logged in successfully");

            Redirect::to("/").into_response()
        }
        _ => (
            StatusCode::UNPROCESSABLE_ENTITY,
            LoginTemplate {
                error: "Invalid email or password".to_string(),
            },
        )
            .into_response(),
    }
}

pub async fn logout_handler(
    State(state): State<AppState>,
    session: Session,
) -> impl IntoResponse {
    // Revoke the token at the identity provider, best effort: logout
    // proceeds even when revocation fails.
    if let Some(access_token) = session.get::<String>("access_token").await.unwrap_or(None) {
        if let Err(e) = state
            .identity_client
            .post(
                "/auth/logout",
                serde_json::json!({
                    "token": access_token
                }),
            )
            .await
        {
            tracing::error!("Failed to revoke token during logout: {}", e);
        } else {
            tracing::info!("Token revoked successfully");
        }
    }

    session.clear().await;

    Redirect::to("/")
}
