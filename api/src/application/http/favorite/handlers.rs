pub mod create_favorite;
pub mod delete_favorite;
pub mod get_favorites;
