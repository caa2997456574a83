use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use service_core::error::AppError;
use tower_sessions::Session;

/// Authenticated user context extracted from the session.
///
/// Rejects with 401 when the session carries no identity, so API handlers
/// taking this extractor never run (and never reach the completion API)
/// for anonymous callers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub access_token: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InternalError(anyhow::anyhow!("Failed to extract session")))?;

        let access_token: Option<String> = session.get("access_token").await.unwrap_or(None);
        let email: Option<String> = session.get("email").await.unwrap_or(None);

        match (access_token, email) {
            (Some(token), Some(email)) => Ok(AuthUser {
                email,
                access_token: token,
            }),
            _ => Err(AppError::Unauthorized(anyhow::anyhow!("sign in required"))),
        }
    }
}
