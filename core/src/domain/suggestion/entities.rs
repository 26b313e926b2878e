use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One model-generated recipe as it comes off the wire, before image
/// lookup and favorite annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedRecipe {
    pub title: String,
    /// Human-readable time string as emitted by the model, e.g. "45 mins".
    pub time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Short descriptive phrase for the stock-photo search.
    pub image_query: String,
}

/// Ephemeral recipe proposal for the current search session. Never
/// persisted; `favorite_id`/`recipe_id` are filled only when the title
/// matches an already-favorited recipe by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuggestedRecipe {
    pub title: String,
    pub time: String,
    /// Minutes derived from `time` by [`parse_minutes`], ready for a
    /// favorite-creation request.
    ///
    /// [`parse_minutes`]: crate::domain::suggestion::helpers::parse_minutes
    pub cooking_time_minutes: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image_query: String,
    pub image_url: Option<String>,
    pub favorite_id: Option<Uuid>,
    pub recipe_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuggestionBatch {
    pub recipes: Vec<SuggestedRecipe>,
}
