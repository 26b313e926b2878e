use axum::extract::State;
use chrono::{DateTime, Utc};
use ladle_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub name: String,
    pub cooking_time: i32,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            cooking_time: recipe.cooking_time_minutes,
            image_url: recipe.image_url,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "Returns every recipe owned by the caller",
    responses(
        (status = 200, body = Vec<RecipeResponse>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<RecipeResponse>>, ApiError> {
    let recipes = state
        .service
        .list_recipes(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        recipes.into_iter().map(RecipeResponse::from).collect(),
    ))
}
