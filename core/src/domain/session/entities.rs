use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    favorite::entities::FavoriteRecipe,
    suggestion::entities::SuggestedRecipe,
};

/// Identifier slot that starts life as a locally generated placeholder and
/// is swapped for the server-issued id once the network call confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotId {
    Persisted(Uuid),
    Placeholder(Uuid),
}

impl SlotId {
    pub fn placeholder() -> Self {
        SlotId::Placeholder(generate_uuid_v7())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SlotId::Placeholder(_))
    }
}

/// A suggestion as tracked by the session: name plus its current favorite
/// linkage. Display fields live on [`SuggestedRecipe`]; the session only
/// tracks what reconciliation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSuggestion {
    pub name: String,
    pub recipe_id: Option<SlotId>,
    pub favorite_id: Option<SlotId>,
}

impl From<&SuggestedRecipe> for SessionSuggestion {
    fn from(recipe: &SuggestedRecipe) -> Self {
        Self {
            name: recipe.title.clone(),
            recipe_id: recipe.recipe_id.map(SlotId::Persisted),
            favorite_id: recipe.favorite_id.map(SlotId::Persisted),
        }
    }
}

/// Entry in the session's mirror of the persisted favorites list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub favorite_id: SlotId,
    pub recipe_id: SlotId,
    pub name: String,
}

impl From<&FavoriteRecipe> for FavoriteEntry {
    fn from(favorite: &FavoriteRecipe) -> Self {
        Self {
            favorite_id: SlotId::Persisted(favorite.favorite_id),
            recipe_id: SlotId::Persisted(favorite.recipe_id),
            name: favorite.name.clone(),
        }
    }
}

/// Point-in-time copy of the mutable session state. Taken before an
/// optimistic update; restoring it is the rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub(crate) favorites: Vec<FavoriteEntry>,
    pub(crate) suggestions: Vec<SessionSuggestion>,
}

/// Token for one in-flight suggestion request. Only the most recently
/// issued token may apply its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(pub(crate) u64);

/// Handle for one optimistic add-to-favorites action: the placeholder ids
/// to confirm and the snapshot to restore on failure.
#[derive(Debug, Clone)]
pub struct PendingFavorite {
    pub favorite_id: SlotId,
    pub recipe_id: SlotId,
    pub snapshot: SessionSnapshot,
}
