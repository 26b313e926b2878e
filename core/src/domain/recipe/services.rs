use uuid::Uuid;

use crate::{
    application::Service,
    domain::{
        auth::{
            ports::{SessionRepository, UserRepository},
            value_objects::Identity,
        },
        common::entities::app_errors::CoreError,
        favorite::ports::FavoriteRepository,
        health::ports::HealthCheckRepository,
        recipe::{
            entities::{Recipe, RecipeConfig},
            ports::{RecipeRepository, RecipeService},
            value_objects::{CreateRecipeInput, UpdateRecipeInput},
        },
        suggestion::ports::{ImageSearchClient, LlmClient},
    },
};

impl<U, S, R, F, H, L, I> RecipeService for Service<U, S, R, F, H, L, I>
where
    U: UserRepository,
    S: SessionRepository,
    R: RecipeRepository,
    F: FavoriteRepository,
    H: HealthCheckRepository,
    L: LlmClient,
    I: ImageSearchClient,
{
    async fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".to_string()));
        }

        let recipe = Recipe::new(RecipeConfig {
            user_id: identity.user_id(),
            name: input.name,
            cooking_time_minutes: input.cooking_time_minutes,
            image_url: input.image_url,
            ingredients: input.ingredients,
            instructions: input.instructions,
        });

        self.recipe_repository.create(recipe).await
    }

    async fn get_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id, identity.user_id())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn list_recipes(&self, identity: Identity) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository
            .list_for_user(identity.user_id())
            .await
    }

    async fn update_recipe(
        &self,
        identity: Identity,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".to_string()));
        }

        // Ownership check doubles as existence check: a foreign recipe is
        // indistinguishable from a missing one.
        let mut recipe = self
            .recipe_repository
            .get_by_id(input.recipe_id, identity.user_id())
            .await?
            .ok_or(CoreError::NotFound)?;

        recipe.apply_update(RecipeConfig {
            user_id: recipe.user_id,
            name: input.name,
            cooking_time_minutes: input.cooking_time_minutes,
            image_url: input.image_url,
            ingredients: input.ingredients,
            instructions: input.instructions,
        });

        self.recipe_repository.update(recipe).await
    }

    async fn delete_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<(), CoreError> {
        let deleted = self
            .recipe_repository
            .delete(recipe_id, identity.user_id())
            .await?;

        if deleted == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tests::{mock_service, test_identity};
    use crate::domain::recipe::ports::MockRecipeRepository;

    #[tokio::test]
    async fn create_recipe_rejects_blank_name() {
        let service = mock_service();

        let result = service
            .create_recipe(
                test_identity(),
                CreateRecipeInput {
                    name: "   ".to_string(),
                    cooking_time_minutes: 30,
                    image_url: None,
                    ingredients: vec![],
                    instructions: vec![],
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn create_recipe_allows_repeated_names() {
        // Name-based dedup belongs to the favorite-creation path only;
        // direct creation does no name lookup and always inserts.
        let mut recipes = MockRecipeRepository::new();
        recipes.expect_get_by_name().never();
        recipes
            .expect_create()
            .times(2)
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));

        let mut service = mock_service();
        service.recipe_repository = recipes;

        let input = || CreateRecipeInput {
            name: "Shakshuka".to_string(),
            cooking_time_minutes: 25,
            image_url: None,
            ingredients: vec!["eggs".to_string()],
            instructions: vec!["simmer".to_string()],
        };

        let first = service
            .create_recipe(test_identity(), input())
            .await
            .unwrap();
        let second = service
            .create_recipe(test_identity(), input())
            .await
            .unwrap();

        assert_eq!(first.name, second.name);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn delete_of_foreign_recipe_is_not_found() {
        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_delete()
            .returning(|_, _| Box::pin(async { Ok(0) }));

        let mut service = mock_service();
        service.recipe_repository = recipes;

        let result = service
            .delete_recipe(test_identity(), Uuid::new_v4())
            .await;

        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }
}
