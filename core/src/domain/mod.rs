pub mod auth;
pub mod common;
pub mod favorite;
pub mod health;
pub mod recipe;
pub mod session;
pub mod suggestion;
