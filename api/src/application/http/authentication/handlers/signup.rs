use axum::extract::State;
use chrono::{DateTime, Utc};
use ladle_core::domain::auth::{entities::User, ports::AuthService, value_objects::RegisterInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    authentication::validators::SignupValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SignupResponse {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for SignupResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            created_at: user.created_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    summary = "Create an account",
    request_body = SignupValidator,
    responses(
        (status = 201, body = SignupResponse, description = "Account created"),
        (status = 400, description = "Invalid email or password"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SignupValidator>,
) -> Result<Response<SignupResponse>, ApiError> {
    let user = state
        .service
        .register(RegisterInput {
            email: payload.email,
            password: payload.password,
            display_name: payload.display_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SignupResponse::from(user)))
}
