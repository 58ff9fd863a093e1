//! Tavily web search client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::{Error, Result};

use super::web_search::{WebSearchProvider, WebSearchResult};

const API_URL: &str = "https://api.tavily.com/search";

/// Web search provider backed by the Tavily API
pub struct TavilyClient {
    client: Client,
    api_url: String,
    api_key: String,
    depth: String,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct SearchReply {
    results: Vec<TavilyResult>,
}

#[derive(Deserialize)]
struct TavilyResult {
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

impl TavilyClient {
    /// Create a new Tavily client
    pub fn new(config: &SearchConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::config("Tavily API key is empty"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: API_URL.to_string(),
            api_key: config.api_key.clone(),
            depth: config.depth.clone(),
        })
    }
}

#[async_trait]
impl WebSearchProvider for TavilyClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<WebSearchResult>> {
        let request = SearchRequest {
            api_key: &self.api_key,
            query,
            search_depth: &self.depth,
            max_results,
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::web_search(format!("Tavily request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::web_search(format!(
                "Tavily search failed ({}): {}",
                status, body
            )));
        }

        let reply: SearchReply = response
            .json()
            .await
            .map_err(|e| Error::web_search(format!("Failed to parse Tavily response: {}", e)))?;

        Ok(reply
            .results
            .into_iter()
            .map(|r| WebSearchResult {
                url: r.url,
                title: r.title,
                content: r.content,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "tavily"
    }
}
