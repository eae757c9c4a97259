//! Search backend seam.

use async_trait::async_trait;

use klinika_core::types::SearchResult;

use crate::error::SearchError;

/// Remote site search, abstracted so the overlay can be driven in tests
/// without a network.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute a full-text site search for `query`.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}
