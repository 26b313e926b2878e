use crate::domain::{
    auth::ports::{SessionRepository, UserRepository},
    common::{AuthConfig, LadleConfig},
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    recipe::ports::RecipeRepository,
    suggestion::ports::{ImageSearchClient, LlmClient},
};
use crate::infrastructure::{
    auth::repositories::{PostgresSessionRepository, PostgresUserRepository},
    db::postgres::{Postgres, PostgresConfig},
    favorite::repositories::PostgresFavoriteRepository,
    health::repository::PostgresHealthCheckRepository,
    image_search::pexels_client::PexelsImageSearchClient,
    llm::gemini_client::GeminiLlmClient,
    recipe::repositories::PostgresRecipeRepository,
};

/// One service object implementing every domain service trait, generic
/// over its ports so tests can swap in mocks per concern.
#[derive(Debug, Clone)]
pub struct Service<U, S, R, F, H, L, I>
where
    U: UserRepository,
    S: SessionRepository,
    R: RecipeRepository,
    F: FavoriteRepository,
    H: HealthCheckRepository,
    L: LlmClient,
    I: ImageSearchClient,
{
    pub user_repository: U,
    pub session_repository: S,
    pub recipe_repository: R,
    pub favorite_repository: F,
    pub health_repository: H,
    pub llm_client: L,
    pub image_client: I,
    pub auth_config: AuthConfig,
}

pub type LadleService = Service<
    PostgresUserRepository,
    PostgresSessionRepository,
    PostgresRecipeRepository,
    PostgresFavoriteRepository,
    PostgresHealthCheckRepository,
    GeminiLlmClient,
    PexelsImageSearchClient,
>;

/// Wires the default production stack: Postgres repositories, the Gemini
/// structured-output client, and the Pexels photo search.
pub async fn create_service(config: LadleConfig) -> Result<LadleService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    Ok(Service {
        user_repository: PostgresUserRepository::new(postgres.get_db()),
        session_repository: PostgresSessionRepository::new(postgres.get_db()),
        recipe_repository: PostgresRecipeRepository::new(postgres.get_db()),
        favorite_repository: PostgresFavoriteRepository::new(postgres.get_db()),
        health_repository: PostgresHealthCheckRepository::new(postgres.get_db()),
        llm_client: GeminiLlmClient::new(
            config.llm.gemini_api_key.clone(),
            config.llm.gemini_model.clone(),
        ),
        image_client: PexelsImageSearchClient::new(config.image_search.pexels_api_key.clone()),
        auth_config: config.auth,
    })
}

#[cfg(test)]
pub mod tests {
    use super::Service;
    use crate::domain::{
        auth::{
            entities::User,
            ports::{MockSessionRepository, MockUserRepository},
            value_objects::Identity,
        },
        common::AuthConfig,
        favorite::ports::MockFavoriteRepository,
        health::ports::MockHealthCheckRepository,
        recipe::ports::MockRecipeRepository,
        suggestion::ports::{MockImageSearchClient, MockLlmClient},
    };

    pub type MockService = Service<
        MockUserRepository,
        MockSessionRepository,
        MockRecipeRepository,
        MockFavoriteRepository,
        MockHealthCheckRepository,
        MockLlmClient,
        MockImageSearchClient,
    >;

    /// Service over fresh mocks; tests replace the ports they exercise.
    pub fn mock_service() -> MockService {
        Service {
            user_repository: MockUserRepository::new(),
            session_repository: MockSessionRepository::new(),
            recipe_repository: MockRecipeRepository::new(),
            favorite_repository: MockFavoriteRepository::new(),
            health_repository: MockHealthCheckRepository::new(),
            llm_client: MockLlmClient::new(),
            image_client: MockImageSearchClient::new(),
            auth_config: AuthConfig {
                jwt_secret: "test-secret".to_string(),
                token_ttl_minutes: 60,
            },
        }
    }

    pub fn test_identity() -> Identity {
        Identity::User(User::new(
            "cook@example.com".to_string(),
            "Cook".to_string(),
            "hash".to_string(),
        ))
    }
}
