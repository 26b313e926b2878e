use serde::Deserialize;

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
        recipe::ports::RecipeRepository,
        suggestion::{
            entities::{GeneratedRecipe, SuggestedRecipe, SuggestionBatch},
            helpers::{build_prompt, parse_minutes, validate_batch},
            ports::{ImageSearchClient, LlmClient, SuggestionService},
            schema::suggestion_response_schema,
            value_objects::GenerateSuggestionsInput,
        },
    },
};

#[derive(Debug, Deserialize)]
struct RawBatch {
    recipes: Vec<GeneratedRecipe>,
}

impl<U, S, R, F, H, L, I> SuggestionService for Service<U, S, R, F, H, L, I>
where
    U: UserRepository,
    S: SessionRepository,
    R: RecipeRepository,
    F: FavoriteRepository,
    H: HealthCheckRepository,
    L: LlmClient,
    I: ImageSearchClient,
{
    async fn generate_suggestions(
        &self,
        identity: Identity,
        input: GenerateSuggestionsInput,
    ) -> Result<SuggestionBatch, CoreError> {
        let query = input.prompt.trim();
        if query.is_empty() {
            return Err(CoreError::Validation("prompt must not be empty".to_string()));
        }

        let prompt = build_prompt(query, &input.excluded);

        let raw = self
            .llm_client
            .generate_with_text(prompt, suggestion_response_schema())
            .await?;

        let batch: RawBatch = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Failed to parse model response: {}", e);
            CoreError::ExternalService(format!("Failed to parse model response: {}", e))
        })?;

        validate_batch(&batch.recipes)?;

        // Fan-out: one photo lookup per recipe, joined before responding.
        // A failed lookup degrades to "no image"; it never fails the batch.
        let lookups = batch
            .recipes
            .iter()
            .map(|recipe| self.image_client.search_photo(recipe.image_query.clone()));
        let images = futures::future::join_all(lookups).await;

        let favorites = self
            .favorite_repository
            .list_for_user(identity.user_id())
            .await?;

        let recipes = batch
            .recipes
            .into_iter()
            .zip(images)
            .map(|(recipe, image)| {
                let image_url = match image {
                    Ok(url) => url,
                    Err(e) => {
                        tracing::warn!("Image lookup failed for '{}': {}", recipe.image_query, e);
                        None
                    }
                };

                // Annotate with the caller's current favorite state; exact
                // name match is the only link for never-persisted recipes.
                let matched = favorites.iter().find(|f| f.name == recipe.title);

                SuggestedRecipe {
                    title: recipe.title,
                    cooking_time_minutes: parse_minutes(&recipe.time),
                    time: recipe.time,
                    ingredients: recipe.ingredients,
                    instructions: recipe.instructions,
                    image_query: recipe.image_query,
                    image_url,
                    favorite_id: matched.map(|f| f.favorite_id),
                    recipe_id: matched.map(|f| f.recipe_id),
                }
            })
            .collect();

        Ok(SuggestionBatch { recipes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tests::{mock_service, test_identity};
    use crate::domain::favorite::entities::FavoriteRecipe;
    use crate::domain::favorite::ports::MockFavoriteRepository;
    use crate::domain::suggestion::ports::{MockImageSearchClient, MockLlmClient};
    use serde_json::json;
    use uuid::Uuid;

    fn model_response(count: usize) -> String {
        let recipes: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "title": format!("Recipe {i}"),
                    "time": "45 mins",
                    "ingredients": ["oats", "berries"],
                    "instructions": ["mix", "serve"],
                    "image_query": format!("recipe {i} bowl"),
                })
            })
            .collect();
        json!({ "recipes": recipes }).to_string()
    }

    fn llm_returning(response: String) -> MockLlmClient {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_text().returning(move |_, _| {
            let response = response.clone();
            Box::pin(async move { Ok(response) })
        });
        llm
    }

    fn no_favorites() -> MockFavoriteRepository {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_list_for_user()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));
        favorites
    }

    fn images_found() -> MockImageSearchClient {
        let mut images = MockImageSearchClient::new();
        images.expect_search_photo().returning(|query| {
            Box::pin(async move { Ok(Some(format!("https://images.example/{query}"))) })
        });
        images
    }

    #[tokio::test]
    async fn empty_prompt_is_a_validation_error() {
        let service = mock_service();

        let result = service
            .generate_suggestions(
                test_identity(),
                GenerateSuggestionsInput {
                    prompt: "  ".to_string(),
                    excluded: vec![],
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn returns_exactly_five_annotated_recipes() {
        let mut service = mock_service();
        service.llm_client = llm_returning(model_response(5));
        service.image_client = images_found();
        service.favorite_repository = no_favorites();

        let batch = service
            .generate_suggestions(
                test_identity(),
                GenerateSuggestionsInput {
                    prompt: "healthy vegan breakfast".to_string(),
                    excluded: vec![],
                },
            )
            .await
            .unwrap();

        assert_eq!(batch.recipes.len(), 5);
        for recipe in &batch.recipes {
            assert!(!recipe.title.is_empty());
            assert_eq!(recipe.cooking_time_minutes, 45);
            assert!(recipe.image_url.is_some());
            assert!(recipe.favorite_id.is_none());
        }
    }

    #[tokio::test]
    async fn wrong_cardinality_is_rejected() {
        let mut service = mock_service();
        service.llm_client = llm_returning(model_response(3));

        let result = service
            .generate_suggestions(
                test_identity(),
                GenerateSuggestionsInput {
                    prompt: "dinner".to_string(),
                    excluded: vec![],
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::ExternalService(_))));
    }

    #[tokio::test]
    async fn image_failures_degrade_to_no_image() {
        let mut images = MockImageSearchClient::new();
        images.expect_search_photo().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalService("image api down".to_string())) })
        });

        let mut service = mock_service();
        service.llm_client = llm_returning(model_response(5));
        service.image_client = images;
        service.favorite_repository = no_favorites();

        let batch = service
            .generate_suggestions(
                test_identity(),
                GenerateSuggestionsInput {
                    prompt: "soup".to_string(),
                    excluded: vec![],
                },
            )
            .await
            .unwrap();

        assert_eq!(batch.recipes.len(), 5);
        assert!(batch.recipes.iter().all(|r| r.image_url.is_none()));
    }

    #[tokio::test]
    async fn already_favorited_titles_carry_their_ids() {
        let favorite_id = Uuid::new_v4();
        let recipe_id = Uuid::new_v4();

        let mut favorites = MockFavoriteRepository::new();
        favorites.expect_list_for_user().returning(move |_| {
            Box::pin(async move {
                Ok(vec![FavoriteRecipe {
                    favorite_id,
                    recipe_id,
                    name: "Recipe 2".to_string(),
                    cooking_time_minutes: 45,
                    image_url: None,
                    ingredients: vec![],
                    instructions: vec![],
                    favorited_at: chrono::Utc::now(),
                }])
            })
        });

        let mut service = mock_service();
        service.llm_client = llm_returning(model_response(5));
        service.image_client = images_found();
        service.favorite_repository = favorites;

        let batch = service
            .generate_suggestions(
                test_identity(),
                GenerateSuggestionsInput {
                    prompt: "breakfast".to_string(),
                    excluded: vec![],
                },
            )
            .await
            .unwrap();

        let matched = batch
            .recipes
            .iter()
            .find(|r| r.title == "Recipe 2")
            .unwrap();
        assert_eq!(matched.favorite_id, Some(favorite_id));
        assert_eq!(matched.recipe_id, Some(recipe_id));
    }

    #[tokio::test]
    async fn exclusions_reach_the_model_prompt() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("Do not suggest") && prompt.contains("Overnight Oats"))
            .returning(|_, _| Box::pin(async { Ok(model_response_static()) }));

        let mut service = mock_service();
        service.llm_client = llm;
        service.image_client = images_found();
        service.favorite_repository = no_favorites();

        let batch = service
            .generate_suggestions(
                test_identity(),
                GenerateSuggestionsInput {
                    prompt: "breakfast".to_string(),
                    excluded: vec!["Overnight Oats".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(batch.recipes.len(), 5);
    }

    fn model_response_static() -> String {
        model_response(5)
    }
}
