use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::auth::entities::User;

/// Authenticated caller resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    User(User),
}

impl Identity {
    pub fn user_id(&self) -> uuid::Uuid {
        match self {
            Identity::User(user) => user.id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginOutput {
    pub token: String,
    pub user: User,
}
