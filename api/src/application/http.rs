pub mod ai;
pub mod authentication;
pub mod favorite;
pub mod health;
pub mod recipe;
pub mod server;
