use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{common::entities::app_errors::CoreError, suggestion::ports::ImageSearchClient};

#[derive(Debug, Clone)]
pub struct PexelsImageSearchClient {
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSource,
}

#[derive(Debug, Deserialize)]
struct PhotoSource {
    medium: String,
}

impl PexelsImageSearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }
}

impl ImageSearchClient for PexelsImageSearchClient {
    async fn search_photo(&self, query: String) -> Result<Option<String>, CoreError> {
        // Missing credential degrades to "no image" rather than failing
        // the suggestion request.
        if self.api_key.is_empty() {
            warn!("Pexels API key not configured, skipping image lookup");
            return Ok(None);
        }

        let url = format!(
            "https://api.pexels.com/v1/search?query={}&per_page=1",
            urlencoding::encode(&query)
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                warn!("Pexels request failed for '{}': {}", query, e);
                CoreError::ExternalService(format!("Image search error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Pexels returned {} for '{}'", status, query);
            return Err(CoreError::ExternalService(format!(
                "Image search returned error: {}",
                status
            )));
        }

        let search: SearchResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse Pexels response: {}", e);
            CoreError::ExternalService(format!("Failed to parse image search response: {}", e))
        })?;

        Ok(search.photos.into_iter().next().map(|p| p.src.medium))
    }
}
