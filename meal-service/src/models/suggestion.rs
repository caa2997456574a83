use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/suggestions`.
#[derive(Debug, Deserialize, Validate)]
pub struct SuggestionRequest {
    #[validate(length(min = 1, message = "Ingredient list is required"))]
    pub text: String,
}

/// Response of `POST /api/suggestions`. `steps` is empty when the
/// completion call failed or produced nothing.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub steps: Vec<String>,
}
