use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateValidator {
    #[validate(length(min = 1, message = "prompt is required"))]
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegenerateValidator {
    #[validate(length(min = 1, message = "prompt is required"))]
    pub prompt: String,

    /// Recipe names the caller has already rejected in this session.
    #[serde(default, rename = "excludedRecipes", alias = "excluded_recipes")]
    pub excluded_recipes: Vec<String>,
}
