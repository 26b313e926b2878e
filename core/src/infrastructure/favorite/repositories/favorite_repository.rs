use std::collections::HashMap;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        favorite::{
            entities::{Favorite, FavoriteRecipe},
            ports::FavoriteRepository,
        },
    },
    entity::{
        favorites::{ActiveModel, Column, Entity},
        recipes::{Column as RecipeColumn, Entity as RecipeEntity},
    },
    infrastructure::{favorite::mappers::to_favorite_recipe, recipe::repositories::recipe_repository::load_children_batch},
};

#[derive(Debug, Clone)]
pub struct PostgresFavoriteRepository {
    pub db: DatabaseConnection,
}

impl PostgresFavoriteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FavoriteRepository for PostgresFavoriteRepository {
    async fn create(&self, favorite: Favorite) -> Result<Favorite, CoreError> {
        let active_model = ActiveModel {
            id: Set(favorite.id),
            user_id: Set(favorite.user_id),
            recipe_id: Set(favorite.recipe_id),
            created_at: Set(favorite.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Favorite::from(created))
    }

    async fn get_by_user_and_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Option<Favorite>, CoreError> {
        let favorite = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::RecipeId.eq(recipe_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(favorite.map(Favorite::from))
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<FavoriteRecipe>, CoreError> {
        let favorite_rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by(Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list favorites: {}", e);
                CoreError::InternalServerError
            })?;

        if favorite_rows.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<Uuid> = favorite_rows.iter().map(|f| f.recipe_id).collect();

        let recipe_rows = RecipeEntity::find()
            .filter(RecipeColumn::Id.is_in(recipe_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load favorited recipes: {}", e);
                CoreError::InternalServerError
            })?;
        let recipes_by_id: HashMap<Uuid, _> =
            recipe_rows.into_iter().map(|r| (r.id, r)).collect();

        let (mut ingredients, mut instructions) =
            load_children_batch(&self.db, &recipe_ids).await?;

        let result = favorite_rows
            .iter()
            .filter_map(|favorite| {
                recipes_by_id.get(&favorite.recipe_id).map(|recipe| {
                    let mut flattened = to_favorite_recipe(favorite, recipe);
                    flattened.ingredients = ingredients.remove(&recipe.id).unwrap_or_default();
                    flattened.instructions = instructions.remove(&recipe.id).unwrap_or_default();
                    flattened
                })
            })
            .collect();

        Ok(result)
    }

    async fn delete(&self, favorite_id: Uuid, user_id: Uuid) -> Result<u64, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(favorite_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete favorite: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
