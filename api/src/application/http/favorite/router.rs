use super::handlers::create_favorite::{__path_create_favorite, create_favorite};
use super::handlers::delete_favorite::{__path_delete_favorite, delete_favorite};
use super::handlers::get_favorites::{__path_get_favorites, get_favorites};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_favorites, create_favorite, delete_favorite))]
pub struct FavoriteApiDoc;

pub fn favorite_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/favorites", state.args.server.root_path),
            get(get_favorites),
        )
        .route(
            &format!("{}/favorites", state.args.server.root_path),
            post(create_favorite),
        )
        .route(
            &format!("{}/favorites/{{favorite_id}}", state.args.server.root_path),
            delete(delete_favorite),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
