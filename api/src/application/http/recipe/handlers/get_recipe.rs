use axum::extract::{Path, State};
use ladle_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::handlers::get_recipes::RecipeResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe id"),
    ),
    responses(
        (status = 200, body = RecipeResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Recipe not found or owned by another user")
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecipeResponse::from(recipe)))
}
