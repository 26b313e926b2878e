use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    auth::value_objects::Identity,
    common::entities::app_errors::CoreError,
    favorite::{
        entities::{Favorite, FavoriteRecipe},
        value_objects::{SaveFavoriteInput, SaveFavoriteOutput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait FavoriteRepository: Send + Sync {
    fn create(
        &self,
        favorite: Favorite,
    ) -> impl Future<Output = Result<Favorite, CoreError>> + Send;

    fn get_by_user_and_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Favorite>, CoreError>> + Send;

    fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FavoriteRecipe>, CoreError>> + Send;

    /// Deletes the favorite only when it belongs to `user_id`; returns the
    /// number of rows removed.
    fn delete(
        &self,
        favorite_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FavoriteService: Send + Sync {
    fn save_favorite(
        &self,
        identity: Identity,
        input: SaveFavoriteInput,
    ) -> impl Future<Output = Result<SaveFavoriteOutput, CoreError>> + Send;

    fn list_favorites(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<FavoriteRecipe>, CoreError>> + Send;

    fn remove_favorite(
        &self,
        identity: Identity,
        favorite_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
