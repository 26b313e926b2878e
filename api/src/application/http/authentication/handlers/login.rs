use axum::extract::State;
use ladle_core::domain::auth::{
    ports::AuthService,
    value_objects::{LoginInput, LoginOutput},
};

use crate::application::http::{
    authentication::validators::LoginValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Log in",
    description = "Exchanges email and password for a bearer token",
    request_body = LoginValidator,
    responses(
        (status = 200, body = LoginOutput, description = "Token issued"),
        (status = 401, description = "Unknown email or wrong password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginOutput>, ApiError> {
    let output = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(output))
}
