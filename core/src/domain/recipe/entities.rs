use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub cooking_time_minutes: i32,
    pub image_url: Option<String>,
    /// Ordered; position is preserved through storage.
    pub ingredients: Vec<String>,
    /// Ordered; position is preserved through storage.
    pub instructions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub user_id: Uuid,
    pub name: String,
    pub cooking_time_minutes: i32,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            name: config.name,
            cooking_time_minutes: config.cooking_time_minutes,
            image_url: config.image_url,
            ingredients: config.ingredients,
            instructions: config.instructions,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full-record update; partial patches are not part of the contract.
    pub fn apply_update(&mut self, config: RecipeConfig) {
        let (now, _) = generate_timestamp();

        self.name = config.name;
        self.cooking_time_minutes = config.cooking_time_minutes;
        self.image_url = config.image_url;
        self.ingredients = config.ingredients;
        self.instructions = config.instructions;
        self.updated_at = now;
    }
}
