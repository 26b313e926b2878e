use uuid::Uuid;

use crate::domain::{
    favorite::entities::FavoriteRecipe,
    session::entities::{
        FavoriteEntry, PendingFavorite, RequestToken, SessionSnapshot, SessionSuggestion, SlotId,
    },
    suggestion::entities::SuggestionBatch,
};

/// State for one search session. Reset transitions are explicit:
/// a new search discards suggestions, a cleared search additionally
/// clears the exclusion set.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    exclusions: Vec<String>,
    suggestions: Vec<SessionSuggestion>,
    favorites: Vec<FavoriteEntry>,
    latest_request: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    pub fn suggestions(&self) -> &[SessionSuggestion] {
        &self.suggestions
    }

    pub fn favorites(&self) -> &[FavoriteEntry] {
        &self.favorites
    }

    /// Seeds the favorites mirror, typically from the first authoritative
    /// fetch after login.
    pub fn set_favorites(&mut self, favorites: Vec<FavoriteEntry>) {
        self.favorites = favorites;
    }

    /// Starts a new search. Returns a request token for the suggestion
    /// call, or `None` when the query was cleared (which also resets the
    /// exclusion set).
    pub fn begin_search(&mut self, query: &str) -> Option<RequestToken> {
        self.query = query.trim().to_string();
        self.suggestions.clear();

        if self.query.is_empty() {
            self.exclusions.clear();
            return None;
        }

        Some(self.next_request())
    }

    /// Issues a token for an in-flight suggestion request, superseding any
    /// earlier outstanding token.
    pub fn next_request(&mut self) -> RequestToken {
        self.latest_request += 1;
        RequestToken(self.latest_request)
    }

    /// Applies a suggestion response. A response for a superseded token is
    /// dropped so a slow request can never overwrite a newer one.
    pub fn apply_suggestions(&mut self, token: RequestToken, batch: &SuggestionBatch) -> bool {
        if token.0 != self.latest_request {
            return false;
        }

        self.suggestions = batch.recipes.iter().map(SessionSuggestion::from).collect();
        true
    }

    /// Rejects the current batch: every suggestion name joins the
    /// exclusion set (accumulating, never replacing) and a fresh request
    /// token is issued for the regeneration call.
    pub fn reject_batch(&mut self) -> (RequestToken, Vec<String>) {
        for suggestion in &self.suggestions {
            if !self.exclusions.contains(&suggestion.name) {
                self.exclusions.push(suggestion.name.clone());
            }
        }
        self.suggestions.clear();

        let token = self.next_request();
        (token, self.exclusions.clone())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            favorites: self.favorites.clone(),
            suggestions: self.suggestions.clone(),
        }
    }

    /// Rollback: restores the state captured before an optimistic update.
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        self.favorites = snapshot.favorites;
        self.suggestions = snapshot.suggestions;
    }

    /// Optimistically favorites the suggestion at `index`: marks it with
    /// placeholder ids and appends a favorites entry, all before the
    /// network call resolves. Returns `None` when the index is out of
    /// range or the suggestion is already favorited.
    pub fn favorite_optimistic(&mut self, index: usize) -> Option<PendingFavorite> {
        let snapshot = self.snapshot();

        let suggestion = self.suggestions.get_mut(index)?;
        if suggestion.favorite_id.is_some() {
            return None;
        }

        let favorite_id = SlotId::placeholder();
        let recipe_id = suggestion.recipe_id.unwrap_or_else(SlotId::placeholder);

        suggestion.favorite_id = Some(favorite_id);
        suggestion.recipe_id = Some(recipe_id);

        self.favorites.push(FavoriteEntry {
            favorite_id,
            recipe_id,
            name: suggestion.name.clone(),
        });

        Some(PendingFavorite {
            favorite_id,
            recipe_id,
            snapshot,
        })
    }

    /// Commits an optimistic add: swaps the placeholder favorite and
    /// recipe ids for the server-issued ones everywhere they appear.
    pub fn confirm_favorite(&mut self, pending: &PendingFavorite, favorite_id: Uuid, recipe_id: Uuid) {
        for suggestion in &mut self.suggestions {
            if suggestion.favorite_id == Some(pending.favorite_id) {
                suggestion.favorite_id = Some(SlotId::Persisted(favorite_id));
            }
            if suggestion.recipe_id == Some(pending.recipe_id) {
                suggestion.recipe_id = Some(SlotId::Persisted(recipe_id));
            }
        }

        for favorite in &mut self.favorites {
            if favorite.favorite_id == pending.favorite_id {
                favorite.favorite_id = SlotId::Persisted(favorite_id);
                favorite.recipe_id = SlotId::Persisted(recipe_id);
            }
        }
    }

    /// Optimistically removes a favorite: drops the entry and clears the
    /// marker on any matching suggestion. The returned snapshot is the
    /// rollback for a failed network call.
    pub fn unfavorite_optimistic(&mut self, favorite_id: SlotId) -> SessionSnapshot {
        let snapshot = self.snapshot();

        self.favorites.retain(|f| f.favorite_id != favorite_id);
        for suggestion in &mut self.suggestions {
            if suggestion.favorite_id == Some(favorite_id) {
                suggestion.favorite_id = None;
            }
        }

        snapshot
    }

    /// Re-derives every suggestion's favorite marker from a fresh
    /// authoritative favorites list (screen-focus reconciliation).
    /// Persisted recipe id is the identity; exact name is the fallback for
    /// suggestions that were never persisted. A suggestion whose recipe is
    /// no longer favorited loses its marker, even if the removal happened
    /// elsewhere.
    pub fn reconcile(&mut self, fresh: &[FavoriteRecipe]) {
        self.favorites = fresh.iter().map(FavoriteEntry::from).collect();

        for suggestion in &mut self.suggestions {
            let matched = fresh.iter().find(|f| match suggestion.recipe_id {
                Some(SlotId::Persisted(id)) => f.recipe_id == id,
                _ => f.name == suggestion.name,
            });

            match matched {
                Some(favorite) => {
                    suggestion.favorite_id = Some(SlotId::Persisted(favorite.favorite_id));
                    suggestion.recipe_id = Some(SlotId::Persisted(favorite.recipe_id));
                }
                None => suggestion.favorite_id = None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::entities::SuggestedRecipe;
    use chrono::Utc;

    fn suggested(title: &str) -> SuggestedRecipe {
        SuggestedRecipe {
            title: title.to_string(),
            time: "30 mins".to_string(),
            cooking_time_minutes: 30,
            ingredients: vec!["thing".to_string()],
            instructions: vec!["cook".to_string()],
            image_query: format!("{title} photo"),
            image_url: None,
            favorite_id: None,
            recipe_id: None,
        }
    }

    fn batch(titles: &[&str]) -> SuggestionBatch {
        SuggestionBatch {
            recipes: titles.iter().map(|t| suggested(t)).collect(),
        }
    }

    fn favorite_recipe(name: &str) -> FavoriteRecipe {
        FavoriteRecipe {
            favorite_id: Uuid::new_v4(),
            recipe_id: Uuid::new_v4(),
            name: name.to_string(),
            cooking_time_minutes: 30,
            image_url: None,
            ingredients: vec![],
            instructions: vec![],
            favorited_at: Utc::now(),
        }
    }

    fn session_with(titles: &[&str]) -> SearchSession {
        let mut session = SearchSession::new();
        let token = session.begin_search("dinner").unwrap();
        assert!(session.apply_suggestions(token, &batch(titles)));
        session
    }

    #[test]
    fn cleared_query_resets_exclusions() {
        let mut session = session_with(&["Pho", "Ramen"]);
        session.reject_batch();
        assert!(!session.exclusions().is_empty());

        assert!(session.begin_search("").is_none());
        assert!(session.exclusions().is_empty());
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn new_query_keeps_exclusions() {
        let mut session = session_with(&["Pho", "Ramen"]);
        session.reject_batch();

        let token = session.begin_search("noodle soup").unwrap();
        assert!(session.apply_suggestions(token, &batch(&["Laksa"])));
        assert_eq!(session.exclusions(), ["Pho", "Ramen"]);
    }

    #[test]
    fn exclusions_accumulate_across_rejections() {
        let mut session = session_with(&["Pho", "Ramen"]);

        let (token, excluded) = session.reject_batch();
        assert_eq!(excluded, ["Pho", "Ramen"]);

        assert!(session.apply_suggestions(token, &batch(&["Laksa", "Udon"])));
        let (_, excluded) = session.reject_batch();
        assert_eq!(excluded, ["Pho", "Ramen", "Laksa", "Udon"]);
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut session = SearchSession::new();
        let slow = session.begin_search("tacos").unwrap();
        let fast = session.next_request();

        assert!(session.apply_suggestions(fast, &batch(&["Fresh"])));
        assert!(!session.apply_suggestions(slow, &batch(&["Stale"])));
        assert_eq!(session.suggestions()[0].name, "Fresh");
    }

    #[test]
    fn optimistic_add_marks_both_lists_immediately() {
        let mut session = session_with(&["Pho", "Ramen"]);

        let pending = session.favorite_optimistic(1).unwrap();

        assert!(pending.favorite_id.is_placeholder());
        assert_eq!(session.favorites().len(), 1);
        assert_eq!(session.favorites()[0].name, "Ramen");
        assert_eq!(
            session.suggestions()[1].favorite_id,
            Some(pending.favorite_id)
        );
    }

    #[test]
    fn confirm_swaps_placeholder_ids_everywhere() {
        let mut session = session_with(&["Pho"]);
        let pending = session.favorite_optimistic(0).unwrap();

        let favorite_id = Uuid::new_v4();
        let recipe_id = Uuid::new_v4();
        session.confirm_favorite(&pending, favorite_id, recipe_id);

        assert_eq!(
            session.suggestions()[0].favorite_id,
            Some(SlotId::Persisted(favorite_id))
        );
        assert_eq!(
            session.suggestions()[0].recipe_id,
            Some(SlotId::Persisted(recipe_id))
        );
        assert_eq!(session.favorites()[0].favorite_id, SlotId::Persisted(favorite_id));
        assert_eq!(session.favorites()[0].recipe_id, SlotId::Persisted(recipe_id));
    }

    #[test]
    fn add_then_fail_restores_exact_prior_state() {
        let mut session = session_with(&["Pho", "Ramen"]);
        let before = session.snapshot();

        let pending = session.favorite_optimistic(0).unwrap();
        assert_ne!(session.snapshot(), before);

        // Simulated network failure.
        session.restore(pending.snapshot);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn remove_then_fail_restores_exact_prior_state() {
        let mut session = session_with(&["Pho"]);
        let pending = session.favorite_optimistic(0).unwrap();
        let favorite_id = Uuid::new_v4();
        session.confirm_favorite(&pending, favorite_id, Uuid::new_v4());

        let before = session.snapshot();
        let snapshot = session.unfavorite_optimistic(SlotId::Persisted(favorite_id));

        assert!(session.favorites().is_empty());
        assert_eq!(session.suggestions()[0].favorite_id, None);

        session.restore(snapshot);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn already_favorited_suggestion_cannot_be_double_added() {
        let mut session = session_with(&["Pho"]);
        session.favorite_optimistic(0).unwrap();
        assert!(session.favorite_optimistic(0).is_none());
        assert_eq!(session.favorites().len(), 1);
    }

    #[test]
    fn reconcile_clears_marker_removed_elsewhere() {
        let mut session = session_with(&["Pho", "Ramen"]);
        let pending = session.favorite_optimistic(0).unwrap();
        session.confirm_favorite(&pending, Uuid::new_v4(), Uuid::new_v4());

        // Authoritative list no longer contains Pho (removed on another
        // device); Ramen was favorited there instead.
        let fresh = vec![favorite_recipe("Ramen")];
        session.reconcile(&fresh);

        assert_eq!(session.suggestions()[0].favorite_id, None);
        assert_eq!(
            session.suggestions()[1].favorite_id,
            Some(SlotId::Persisted(fresh[0].favorite_id))
        );
        assert_eq!(session.favorites().len(), 1);
        assert_eq!(session.favorites()[0].name, "Ramen");
    }

    #[test]
    fn reconcile_matches_persisted_recipes_by_id_not_name() {
        let mut session = session_with(&["Pho"]);
        let pending = session.favorite_optimistic(0).unwrap();
        let recipe_id = Uuid::new_v4();
        session.confirm_favorite(&pending, Uuid::new_v4(), recipe_id);

        // Same recipe id, renamed server-side: the marker must survive.
        let mut fresh = favorite_recipe("Pho Bo");
        fresh.recipe_id = recipe_id;
        session.reconcile(&[fresh.clone()]);

        assert_eq!(
            session.suggestions()[0].favorite_id,
            Some(SlotId::Persisted(fresh.favorite_id))
        );
    }
}
