use axum::extract::{Path, State};
use ladle_core::domain::recipe::{ports::RecipeService, value_objects::UpdateRecipeInput};
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::{handlers::get_recipes::RecipeResponse, validators::UpdateRecipeValidator},
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
    put,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    description = "Full-record replace; the ingredient and instruction lists are rewritten",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    request_body = UpdateRecipeValidator,
    responses(
        (status = 200, body = RecipeResponse, description = "Recipe updated"),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Recipe not found or owned by another user")
    )
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateRecipeValidator>,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .update_recipe(
            identity,
            UpdateRecipeInput {
                recipe_id,
                name: payload.name,
                cooking_time_minutes: payload.cooking_time,
                image_url: payload.image_url,
                ingredients: payload.ingredients,
                instructions: payload.instructions,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse::from(recipe)))
}
