//! Web search provider trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single result returned by the web search provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebSearchResult {
    /// Result page URL
    pub url: String,
    /// Provider-supplied page title
    pub title: String,
    /// Extracted page content or snippet
    pub content: String,
}

/// Trait for live web search
///
/// Implementations:
/// - `TavilyClient`: Tavily search API
#[async_trait]
pub trait WebSearchProvider: Send + Sync {
    /// Search the web, returning at most `max_results` results in
    /// provider ranking order.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<WebSearchResult>>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
