use crate::{
    application::Service,
    domain::{
        auth::ports::{SessionRepository, UserRepository},
        common::entities::app_errors::CoreError,
        favorite::ports::FavoriteRepository,
        health::{
            entities::ReadinessStatus,
            ports::{HealthCheckRepository, HealthCheckService},
        },
        recipe::ports::RecipeRepository,
        suggestion::ports::{ImageSearchClient, LlmClient},
    },
};

impl<U, S, R, F, H, L, I> HealthCheckService for Service<U, S, R, F, H, L, I>
where
    U: UserRepository,
    S: SessionRepository,
    R: RecipeRepository,
    F: FavoriteRepository,
    H: HealthCheckRepository,
    L: LlmClient,
    I: ImageSearchClient,
{
    async fn readiness(&self) -> Result<ReadinessStatus, CoreError> {
        self.health_repository.readiness().await
    }
}
