pub mod auth;
pub mod db;
pub mod favorite;
pub mod health;
pub mod image_search;
pub mod llm;
pub mod recipe;
