use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A user's saved reference to a recipe. Carries its own identity,
/// distinct from the recipe's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: Uuid, recipe_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            recipe_id,
            created_at: now,
        }
    }
}

/// Read model for the favorites list: the favorite id next to the
/// flattened recipe fields, ingredients and instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRecipe {
    pub favorite_id: Uuid,
    pub recipe_id: Uuid,
    pub name: String,
    pub cooking_time_minutes: i32,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub favorited_at: DateTime<Utc>,
}
