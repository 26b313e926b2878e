use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateRecipeInput {
    pub name: String,
    pub cooking_time_minutes: i32,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateRecipeInput {
    pub recipe_id: Uuid,
    pub name: String,
    pub cooking_time_minutes: i32,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}
