use axum::extract::State;
use ladle_core::domain::favorite::{
    ports::FavoriteService,
    value_objects::{SaveFavoriteInput, SaveFavoriteOutput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        favorite::validators::CreateFavoriteValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateFavoriteResponse {
    #[serde(rename = "favoriteId")]
    pub favorite_id: Uuid,
    #[serde(rename = "recipeId")]
    pub recipe_id: Uuid,
}

impl From<SaveFavoriteOutput> for CreateFavoriteResponse {
    fn from(output: SaveFavoriteOutput) -> Self {
        Self {
            favorite_id: output.favorite_id,
            recipe_id: output.recipe_id,
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "favorite",
    summary = "Add favorite",
    description = "Creates or reuses a recipe with the same name, then favorites it. \
        Returns 200 with the existing ids when the recipe was already favorited, \
        201 when the favorite is new.",
    request_body = CreateFavoriteValidator,
    responses(
        (status = 200, body = CreateFavoriteResponse, description = "Already favorited"),
        (status = 201, body = CreateFavoriteResponse, description = "Favorite created"),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateFavoriteValidator>,
) -> Result<Response<CreateFavoriteResponse>, ApiError> {
    let output = state
        .service
        .save_favorite(
            identity,
            SaveFavoriteInput {
                name: payload.name,
                cooking_time_minutes: payload.cooking_time,
                image_url: payload.image_url,
                ingredients: payload.ingredients,
                instructions: payload.instructions,
            },
        )
        .await
        .map_err(ApiError::from)?;

    if output.already_favorited {
        Ok(Response::OK(CreateFavoriteResponse::from(output)))
    } else {
        Ok(Response::Created(CreateFavoriteResponse::from(output)))
    }
}
