//! TVMaze API client
//!
//! Show search for the home feed and the search screen.
//! API docs: https://www.tvmaze.com/api

use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::{Catalog, CatalogError};
use crate::models::SearchHit;

/// Public TVMaze endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Broad term used to approximate "all shows"
pub const DEFAULT_FEED_QUERY: &str = "all";

/// TVMaze API client
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    base_url: String,
    feed_query: String,
    client: reqwest::Client,
}

impl Default for TvMazeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TvMazeClient {
    /// Create a client against the public API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, DEFAULT_FEED_QUERY, Duration::from_secs(30))
    }

    /// Create a client with every knob exposed
    pub fn with_options(
        base_url: impl Into<String>,
        feed_query: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            feed_query: feed_query.into(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn feed_query(&self) -> &str {
        &self.feed_query
    }

    /// GET a JSON document; any failure is a `CatalogError`
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "catalog request");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|e| {
                    warn!(%url, error = %e, "catalog returned undecodable body");
                    CatalogError::Decode(format!("JSON parse error: {}", e))
                })
            }
            status => Err(CatalogError::Status(status.as_u16())),
        }
    }

    /// Search shows by free-text term
    pub async fn search(&self, term: &str) -> Result<Vec<SearchHit>, CatalogError> {
        let endpoint = format!("/search/shows?q={}", urlencoding::encode(term));
        let hits: Vec<SearchHit> = self.get(&endpoint).await?;
        debug!(term, count = hits.len(), "catalog search finished");
        Ok(hits)
    }
}

impl Catalog for TvMazeClient {
    async fn fetch_all(&self) -> Result<Vec<SearchHit>, CatalogError> {
        self.search(&self.feed_query).await
    }

    async fn fetch_matching(&self, term: &str) -> Result<Vec<SearchHit>, CatalogError> {
        self.search(term).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = TvMazeClient::with_base_url("http://localhost:1234/");
        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[test]
    fn test_defaults() {
        let client = TvMazeClient::new();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.feed_query(), DEFAULT_FEED_QUERY);
    }

    #[test]
    fn test_search_hit_wrapper_parses() {
        let hits: Vec<SearchHit> = serde_json::from_str(
            r#"[{"score": 0.9, "show": {"id": 1, "name": "All American", "genres": ["Drama"]}}]"#,
        )
        .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].show.name, "All American");
    }
}
