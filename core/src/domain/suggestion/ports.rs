use std::future::Future;

use crate::domain::{
    auth::value_objects::Identity,
    common::entities::app_errors::CoreError,
    suggestion::{entities::SuggestionBatch, value_objects::GenerateSuggestionsInput},
};

/// Client for the generative model, constrained to structured JSON output.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Stock-photo lookup. `Ok(None)` covers both "no match" and "no
/// credential configured"; hard failures surface as errors and are
/// absorbed by the suggestion service.
#[cfg_attr(test, mockall::automock)]
pub trait ImageSearchClient: Send + Sync {
    fn search_photo(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SuggestionService: Send + Sync {
    /// Generates exactly 5 suggestions for the prompt, optionally biased
    /// away from the excluded names. Serves both the generate and the
    /// regenerate endpoints; regeneration is generation with a non-empty
    /// exclusion set.
    fn generate_suggestions(
        &self,
        identity: Identity,
        input: GenerateSuggestionsInput,
    ) -> impl Future<Output = Result<SuggestionBatch, CoreError>> + Send;
}
