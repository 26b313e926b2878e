use crate::{
    domain::recipe::entities::Recipe,
    entity::{recipe_ingredients, recipe_instructions, recipes},
};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        // Ingredients and instructions are loaded separately.
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            cooking_time_minutes: model.cooking_time_minutes,
            image_url: model.image_url.clone(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

/// Child rows arrive position-ordered from the query; only the content
/// survives the mapping.
pub fn map_ingredients(rows: Vec<recipe_ingredients::Model>) -> Vec<String> {
    rows.into_iter().map(|row| row.content).collect()
}

pub fn map_instructions(rows: Vec<recipe_instructions::Model>) -> Vec<String> {
    rows.into_iter().map(|row| row.content).collect()
}
