use axum::extract::State;
use ladle_core::domain::suggestion::{
    entities::SuggestionBatch, ports::SuggestionService, value_objects::GenerateSuggestionsInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        ai::validators::RegenerateValidator,
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
    path = "/regenerate",
    tag = "ai",
    summary = "Regenerate recipe suggestions",
    description = "Same contract as generate, with the excluded names appended to the prompt \
        as a negative constraint. The model is expected, not guaranteed, to honor it.",
    request_body = RegenerateValidator,
    responses(
        (status = 200, body = SuggestionBatch),
        (status = 400, description = "Empty prompt"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Generative model failure or malformed response")
    )
)]
pub async fn regenerate_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RegenerateValidator>,
) -> Result<Response<SuggestionBatch>, ApiError> {
    let batch = state
        .service
        .generate_suggestions(
            identity,
            GenerateSuggestionsInput {
                prompt: payload.prompt,
                excluded: payload.excluded_recipes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(batch))
}
