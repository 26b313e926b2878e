use axum::extract::State;
use chrono::{DateTime, Utc};
use ladle_core::domain::favorite::{entities::FavoriteRecipe, ports::FavoriteService};
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

/// One favorites-list row: the favorite id plus the flattened recipe.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FavoriteResponse {
    #[serde(rename = "favoriteId")]
    pub favorite_id: Uuid,
    #[serde(rename = "recipeId")]
    pub recipe_id: Uuid,
    pub name: String,
    pub cooking_time: i32,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub favorited_at: DateTime<Utc>,
}

impl From<FavoriteRecipe> for FavoriteResponse {
    fn from(favorite: FavoriteRecipe) -> Self {
        Self {
            favorite_id: favorite.favorite_id,
            recipe_id: favorite.recipe_id,
            name: favorite.name,
            cooking_time: favorite.cooking_time_minutes,
            image_url: favorite.image_url,
            ingredients: favorite.ingredients,
            instructions: favorite.instructions,
            favorited_at: favorite.favorited_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "favorite",
    summary = "List favorites",
    description = "Returns the caller's favorites with flattened recipe fields",
    responses(
        (status = 200, body = Vec<FavoriteResponse>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<FavoriteResponse>>, ApiError> {
    let favorites = state
        .service
        .list_favorites(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        favorites.into_iter().map(FavoriteResponse::from).collect(),
    ))
}
