pub mod favorites;
pub mod recipe_ingredients;
pub mod recipe_instructions;
pub mod recipes;
pub mod sessions;
pub mod users;
