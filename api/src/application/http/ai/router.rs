use super::handlers::generate_recipes::{__path_generate_recipes, generate_recipes};
use super::handlers::regenerate_recipes::{__path_regenerate_recipes, regenerate_recipes};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipes, regenerate_recipes))]
pub struct AiApiDoc;

pub fn ai_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ai/generate", state.args.server.root_path),
            post(generate_recipes),
        )
        .route(
            &format!("{}/ai/regenerate", state.args.server.root_path),
            post(regenerate_recipes),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
