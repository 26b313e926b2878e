pub mod generate_recipes;
pub mod regenerate_recipes;
