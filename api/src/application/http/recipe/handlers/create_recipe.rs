use axum::extract::State;
use ladle_core::domain::recipe::{ports::RecipeService, value_objects::CreateRecipeInput};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::{handlers::get_recipes::RecipeResponse, validators::CreateRecipeValidator},
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
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    request_body = CreateRecipeValidator,
    responses(
        (status = 201, body = RecipeResponse, description = "Recipe created"),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .create_recipe(
            identity,
            CreateRecipeInput {
                name: payload.name,
                cooking_time_minutes: payload.cooking_time,
                image_url: payload.image_url,
                ingredients: payload.ingredients,
                instructions: payload.instructions,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RecipeResponse::from(recipe)))
}
