use axum::extract::State;
use ladle_core::domain::suggestion::{
    entities::SuggestionBatch, ports::SuggestionService, value_objects::GenerateSuggestionsInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ai::validators::GenerateValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/generate",
    tag = "ai",
    summary = "Generate recipe suggestions",
    description = "Returns exactly 5 suggested recipes for the prompt, each with a looked-up image URL \
        and, where the title matches an existing favorite, its favorite and recipe ids",
    request_body = GenerateValidator,
    responses(
        (status = 200, body = SuggestionBatch),
        (status = 400, description = "Empty prompt"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Generative model failure or malformed response")
    )
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateValidator>,
) -> Result<Response<SuggestionBatch>, ApiError> {
    let batch = state
        .service
        .generate_suggestions(
            identity,
            GenerateSuggestionsInput {
                prompt: payload.prompt,
                excluded: Vec::new(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(batch))
}
