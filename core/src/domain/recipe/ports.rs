use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    auth::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{CreateRecipeInput, UpdateRecipeInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    /// Inserts the recipe row plus its ordered ingredient and instruction
    /// rows. Child-row insert failures are logged and absorbed; the recipe
    /// row is kept (see DESIGN.md).
    fn create(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// Exact, case-sensitive name lookup scoped to one user. This is the
    /// dedup key on the favorite-creation path.
    fn get_by_name(
        &self,
        name: String,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn update(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Returns the number of rows deleted; zero means the recipe did not
    /// exist or belongs to another user.
    fn delete(
        &self,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn list_recipes(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn update_recipe(
        &self,
        identity: Identity,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
