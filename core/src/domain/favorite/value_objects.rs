use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SaveFavoriteInput {
    pub name: String,
    pub cooking_time_minutes: i32,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Outcome of the create-or-reuse favorite flow. `already_favorited`
/// distinguishes the 200 (reused) and 201 (created) responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SaveFavoriteOutput {
    pub favorite_id: Uuid,
    pub recipe_id: Uuid,
    pub already_favorited: bool,
}
