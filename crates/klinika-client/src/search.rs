//! Site search endpoint client.

use async_trait::async_trait;
use serde::Deserialize;

use klinika_core::config::ApiConfig;
use klinika_core::types::SearchResult;
use klinika_search::{SearchBackend, SearchError};

use crate::join_url;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// `GET /api/search?q=...` client.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    url: String,
}

impl SearchClient {
    pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            url: join_url(&config.base_url, &config.search_path),
        }
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let envelope: SearchEnvelope = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;
        Ok(envelope.results)
    }
}
