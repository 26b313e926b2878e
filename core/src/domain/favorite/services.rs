use uuid::Uuid;

use crate::{
    application::Service,
    domain::{
        auth::{
            ports::{SessionRepository, UserRepository},
            value_objects::Identity,
        },
        common::entities::app_errors::CoreError,
        favorite::{
            entities::{Favorite, FavoriteRecipe},
            ports::{FavoriteRepository, FavoriteService},
            value_objects::{SaveFavoriteInput, SaveFavoriteOutput},
        },
        health::ports::HealthCheckRepository,
        recipe::{
            entities::{Recipe, RecipeConfig},
            ports::RecipeRepository,
        },
        suggestion::ports::{ImageSearchClient, LlmClient},
    },
};

impl<U, S, R, F, H, L, I> FavoriteService for Service<U, S, R, F, H, L, I>
where
    U: UserRepository,
    S: SessionRepository,
    R: RecipeRepository,
    F: FavoriteRepository,
    H: HealthCheckRepository,
    L: LlmClient,
    I: ImageSearchClient,
{
    async fn save_favorite(
        &self,
        identity: Identity,
        input: SaveFavoriteInput,
    ) -> Result<SaveFavoriteOutput, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".to_string()));
        }

        let user_id = identity.user_id();

        // Exact name is the dedup key on this path; the HTTP contract
        // requires a second identical request to land on the same recipe.
        let recipe = match self
            .recipe_repository
            .get_by_name(input.name.clone(), user_id)
            .await?
        {
            Some(existing) => existing,
            None => {
                let recipe = Recipe::new(RecipeConfig {
                    user_id,
                    name: input.name,
                    cooking_time_minutes: input.cooking_time_minutes,
                    image_url: input.image_url,
                    ingredients: input.ingredients,
                    instructions: input.instructions,
                });
                self.recipe_repository.create(recipe).await?
            }
        };

        if let Some(existing) = self
            .favorite_repository
            .get_by_user_and_recipe(user_id, recipe.id)
            .await?
        {
            return Ok(SaveFavoriteOutput {
                favorite_id: existing.id,
                recipe_id: recipe.id,
                already_favorited: true,
            });
        }

        let favorite = self
            .favorite_repository
            .create(Favorite::new(user_id, recipe.id))
            .await?;

        Ok(SaveFavoriteOutput {
            favorite_id: favorite.id,
            recipe_id: recipe.id,
            already_favorited: false,
        })
    }

    async fn list_favorites(&self, identity: Identity) -> Result<Vec<FavoriteRecipe>, CoreError> {
        self.favorite_repository
            .list_for_user(identity.user_id())
            .await
    }

    async fn remove_favorite(
        &self,
        identity: Identity,
        favorite_id: Uuid,
    ) -> Result<(), CoreError> {
        let deleted = self
            .favorite_repository
            .delete(favorite_id, identity.user_id())
            .await?;

        // Owner filter held in the query: a foreign favorite id removes
        // nothing and reads as missing.
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
    use crate::domain::favorite::ports::MockFavoriteRepository;
    use crate::domain::recipe::ports::MockRecipeRepository;

    fn input(name: &str) -> SaveFavoriteInput {
        SaveFavoriteInput {
            name: name.to_string(),
            cooking_time_minutes: 20,
            image_url: None,
            ingredients: vec!["spinach".to_string(), "tofu".to_string()],
            instructions: vec!["scramble".to_string()],
        }
    }

    #[tokio::test]
    async fn save_favorite_reuses_recipe_by_exact_name() {
        let identity = test_identity();
        let existing = Recipe::new(RecipeConfig {
            user_id: identity.user_id(),
            name: "Spinach Tofu Scramble".to_string(),
            cooking_time_minutes: 20,
            image_url: None,
            ingredients: vec![],
            instructions: vec![],
        });
        let existing_id = existing.id;

        let mut recipes = MockRecipeRepository::new();
        recipes.expect_get_by_name().returning(move |_, _| {
            let recipe = existing.clone();
            Box::pin(async move { Ok(Some(recipe)) })
        });
        // No create call: reuse must not insert a duplicate recipe row.
        recipes.expect_create().never();

        let prior = Favorite::new(identity.user_id(), existing_id);
        let prior_id = prior.id;

        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_get_by_user_and_recipe().returning(move |_, _| {
            let favorite = prior.clone();
            Box::pin(async move { Ok(Some(favorite)) })
        });

        let mut service = mock_service();
        service.recipe_repository = recipes;
        service.favorite_repository = favorites;

        let output = service
            .save_favorite(identity, input("Spinach Tofu Scramble"))
            .await
            .unwrap();

        assert_eq!(output.recipe_id, existing_id);
        assert_eq!(output.favorite_id, prior_id);
        assert!(output.already_favorited);
    }

    #[tokio::test]
    async fn save_favorite_creates_recipe_and_favorite_when_new() {
        let identity = test_identity();

        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_name()
            .returning(|_, _| Box::pin(async { Ok(None) }));
        recipes
            .expect_create()
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));

        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_get_by_user_and_recipe()
            .returning(|_, _| Box::pin(async { Ok(None) }));
        favorites
            .expect_create()
            .returning(|favorite| Box::pin(async move { Ok(favorite) }));

        let mut service = mock_service();
        service.recipe_repository = recipes;
        service.favorite_repository = favorites;

        let output = service
            .save_favorite(identity, input("Shakshuka"))
            .await
            .unwrap();

        assert!(!output.already_favorited);
    }

    #[tokio::test]
    async fn remove_favorite_of_other_user_is_not_found() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_delete()
            .returning(|_, _| Box::pin(async { Ok(0) }));

        let mut service = mock_service();
        service.favorite_repository = favorites;

        let result = service
            .remove_favorite(test_identity(), Uuid::new_v4())
            .await;

        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }
}
