use crate::{
    domain::favorite::entities::{Favorite, FavoriteRecipe},
    entity::{favorites, recipes},
};

impl From<&favorites::Model> for Favorite {
    fn from(model: &favorites::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            recipe_id: model.recipe_id,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<favorites::Model> for Favorite {
    fn from(model: favorites::Model) -> Self {
        Self::from(&model)
    }
}

/// Flattens a favorite row and its recipe row into the list read model.
/// Ingredients and instructions are filled in separately.
pub fn to_favorite_recipe(favorite: &favorites::Model, recipe: &recipes::Model) -> FavoriteRecipe {
    FavoriteRecipe {
        favorite_id: favorite.id,
        recipe_id: recipe.id,
        name: recipe.name.clone(),
        cooking_time_minutes: recipe.cooking_time_minutes,
        image_url: recipe.image_url.clone(),
        ingredients: Vec::new(),
        instructions: Vec::new(),
        favorited_at: favorite.created_at.to_utc(),
    }
}
