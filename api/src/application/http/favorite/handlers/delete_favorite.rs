use axum::{
    Json,
    extract::{Path, State},
};
use ladle_core::domain::favorite::ports::FavoriteService;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[utoipa::path(
    delete,
    path = "/{favorite_id}",
    tag = "favorite",
    summary = "Remove favorite",
    description = "Deletes the caller's favorite; another user's favorite with the same id is untouched",
    params(
        ("favorite_id" = Uuid, Path, description = "Favorite id"),
    ),
    responses(
        (status = 200, body = String, description = "Favorite removed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Favorite not found or owned by another user")
    )
)]
pub async fn delete_favorite(
    Path(favorite_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Json<String>, ApiError> {
    state
        .service
        .remove_favorite(identity, favorite_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json("Favorite removed".to_string()))
}
