use axum::{extract::State, http::request::Parts};
use ladle_core::domain::auth::ports::AuthService;

use crate::application::{
    auth::extract_token_from_bearer,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    summary = "Log out",
    description = "Invalidates the session behind the presented bearer token",
    responses(
        (status = 200, body = String, description = "Session invalidated"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    mut parts: Parts,
) -> Result<Response<String>, ApiError> {
    let token = extract_token_from_bearer(&mut parts).await?;

    state
        .service
        .logout(token)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK("Logged out".to_string()))
}
