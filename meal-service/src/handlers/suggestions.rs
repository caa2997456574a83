use crate::models::suggestion::{SuggestionRequest, SuggestionResponse};
use crate::models::user::AuthUser;
use crate::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

/// `POST /api/suggestions`: turn an ingredient list into recipe steps.
///
/// Requires a signed-in caller (the `AuthUser` extractor rejects with 401
/// before the body is read). Completion failures are swallowed inside the
/// suggestion service, so the response is always `{ "steps": [...] }`.
pub async fn create_suggestion(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    req.validate()?;

    tracing::debug!(
        email = %user.email,
        input_len = req.text.len(),
        "Suggestion requested"
    );

    let steps = state.suggestions.suggest(&req.text).await;

    Ok(Json(SuggestionResponse { steps }))
}
