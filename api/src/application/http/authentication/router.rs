use super::handlers::login::{__path_login, login};
use super::handlers::logout::{__path_logout, logout};
use super::handlers::signup::{__path_signup, signup};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(signup, login, logout))]
pub struct AuthenticationApiDoc;

/// Logout stays outside the auth middleware; it resolves and invalidates
/// its own bearer token so an expired session can still be cleared.
pub fn authentication_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/auth/signup", state.args.server.root_path),
            post(signup),
        )
        .route(
            &format!("{}/auth/login", state.args.server.root_path),
            post(login),
        )
        .route(
            &format!("{}/auth/logout", state.args.server.root_path),
            post(logout),
        )
}
