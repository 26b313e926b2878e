use std::collections::HashMap;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_uuid_v7},
        recipe::{entities::Recipe, ports::RecipeRepository},
    },
    entity::{
        recipe_ingredients::{
            ActiveModel as IngredientActiveModel, Column as IngredientColumn,
            Entity as IngredientEntity,
        },
        recipe_instructions::{
            ActiveModel as InstructionActiveModel, Column as InstructionColumn,
            Entity as InstructionEntity,
        },
        recipes::{ActiveModel, Column, Entity},
    },
    infrastructure::recipe::mappers::{map_ingredients, map_instructions},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts ordered child rows for one recipe. Failures are logged and
    /// absorbed; the recipe row stays (kept inconsistency, see DESIGN.md).
    async fn insert_children(&self, recipe: &Recipe) {
        if !recipe.ingredients.is_empty() {
            let rows: Vec<IngredientActiveModel> = recipe
                .ingredients
                .iter()
                .enumerate()
                .map(|(position, content)| IngredientActiveModel {
                    id: Set(generate_uuid_v7()),
                    recipe_id: Set(recipe.id),
                    position: Set(position as i32),
                    content: Set(content.clone()),
                })
                .collect();

            if let Err(e) = IngredientEntity::insert_many(rows).exec(&self.db).await {
                error!("Failed to insert ingredients for recipe {}: {}", recipe.id, e);
            }
        }

        if !recipe.instructions.is_empty() {
            let rows: Vec<InstructionActiveModel> = recipe
                .instructions
                .iter()
                .enumerate()
                .map(|(position, content)| InstructionActiveModel {
                    id: Set(generate_uuid_v7()),
                    recipe_id: Set(recipe.id),
                    position: Set(position as i32),
                    content: Set(content.clone()),
                })
                .collect();

            if let Err(e) = InstructionEntity::insert_many(rows).exec(&self.db).await {
                error!(
                    "Failed to insert instructions for recipe {}: {}",
                    recipe.id, e
                );
            }
        }
    }

    async fn load_children(&self, recipe: &mut Recipe) -> Result<(), CoreError> {
        let ingredients = IngredientEntity::find()
            .filter(IngredientColumn::RecipeId.eq(recipe.id))
            .order_by(IngredientColumn::Position, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load ingredients: {}", e);
                CoreError::InternalServerError
            })?;
        recipe.ingredients = map_ingredients(ingredients);

        let instructions = InstructionEntity::find()
            .filter(InstructionColumn::RecipeId.eq(recipe.id))
            .order_by(InstructionColumn::Position, Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load instructions: {}", e);
                CoreError::InternalServerError
            })?;
        recipe.instructions = map_instructions(instructions);

        Ok(())
    }

    async fn delete_children(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        IngredientEntity::delete_many()
            .filter(IngredientColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        InstructionEntity::delete_many()
            .filter(InstructionColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete instructions: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}

/// Loads children for a set of recipes in two queries and groups them in
/// memory.
pub(crate) async fn load_children_batch(
    db: &DatabaseConnection,
    recipe_ids: &[Uuid],
) -> Result<(HashMap<Uuid, Vec<String>>, HashMap<Uuid, Vec<String>>), CoreError> {
    if recipe_ids.is_empty() {
        return Ok((HashMap::new(), HashMap::new()));
    }

    let ingredient_rows = IngredientEntity::find()
        .filter(IngredientColumn::RecipeId.is_in(recipe_ids.to_vec()))
        .order_by(IngredientColumn::Position, Order::Asc)
        .all(db)
        .await
        .map_err(|e| {
            error!("Failed to load ingredients: {}", e);
            CoreError::InternalServerError
        })?;

    let instruction_rows = InstructionEntity::find()
        .filter(InstructionColumn::RecipeId.is_in(recipe_ids.to_vec()))
        .order_by(InstructionColumn::Position, Order::Asc)
        .all(db)
        .await
        .map_err(|e| {
            error!("Failed to load instructions: {}", e);
            CoreError::InternalServerError
        })?;

    let mut ingredients: HashMap<Uuid, Vec<String>> = HashMap::new();
    for row in ingredient_rows {
        ingredients.entry(row.recipe_id).or_default().push(row.content);
    }

    let mut instructions: HashMap<Uuid, Vec<String>> = HashMap::new();
    for row in instruction_rows {
        instructions
            .entry(row.recipe_id)
            .or_default()
            .push(row.content);
    }

    Ok((ingredients, instructions))
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let active_model = ActiveModel {
            id: Set(recipe.id),
            user_id: Set(recipe.user_id),
            name: Set(recipe.name.clone()),
            cooking_time_minutes: Set(recipe.cooking_time_minutes),
            image_url: Set(recipe.image_url.clone()),
            created_at: Set(recipe.created_at.fixed_offset()),
            updated_at: Set(recipe.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;

        self.insert_children(&recipe).await;

        let mut result = Recipe::from(created);
        result.ingredients = recipe.ingredients;
        result.instructions = recipe.instructions;
        Ok(result)
    }

    async fn get_by_id(&self, recipe_id: Uuid, user_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let model = Entity::find()
            .filter(Column::Id.eq(recipe_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?;

        match model {
            Some(model) => {
                let mut recipe = Recipe::from(model);
                self.load_children(&mut recipe).await?;
                Ok(Some(recipe))
            }
            None => Ok(None),
        }
    }

    async fn get_by_name(&self, name: String, user_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let model = Entity::find()
            .filter(Column::Name.eq(name))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe by name: {}", e);
                CoreError::InternalServerError
            })?;

        match model {
            Some(model) => {
                let mut recipe = Recipe::from(model);
                self.load_children(&mut recipe).await?;
                Ok(Some(recipe))
            }
            None => Ok(None),
        }
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Recipe>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by(Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipes: {}", e);
                CoreError::InternalServerError
            })?;

        let recipe_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let (mut ingredients, mut instructions) =
            load_children_batch(&self.db, &recipe_ids).await?;

        let recipes = models
            .iter()
            .map(|model| {
                let mut recipe = Recipe::from(model);
                recipe.ingredients = ingredients.remove(&recipe.id).unwrap_or_default();
                recipe.instructions = instructions.remove(&recipe.id).unwrap_or_default();
                recipe
            })
            .collect();

        Ok(recipes)
    }

    async fn update(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let active_model = ActiveModel {
            id: Set(recipe.id),
            user_id: Set(recipe.user_id),
            name: Set(recipe.name.clone()),
            cooking_time_minutes: Set(recipe.cooking_time_minutes),
            image_url: Set(recipe.image_url.clone()),
            created_at: Set(recipe.created_at.fixed_offset()),
            updated_at: Set(recipe.updated_at.fixed_offset()),
        };

        Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe: {}", e);
                CoreError::InternalServerError
            })?;

        // Full-record update: children are replaced wholesale.
        self.delete_children(recipe.id).await?;
        self.insert_children(&recipe).await;

        Ok(recipe)
    }

    async fn delete(&self, recipe_id: Uuid, user_id: Uuid) -> Result<u64, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(recipe_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
