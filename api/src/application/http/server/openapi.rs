use crate::application::http::{
    ai::router::AiApiDoc, authentication::router::AuthenticationApiDoc,
    favorite::router::FavoriteApiDoc, health::HealthApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ladle API"
    ),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/favorites", api = FavoriteApiDoc),
        (path = "/ai", api = AiApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
