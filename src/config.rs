//! Configuration for the query service

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Embedding service configuration
    pub embedding: EmbeddingConfig,
    /// Vector database configuration
    pub vector_db: VectorDbConfig,
    /// LLM configuration
    pub llm: LlmConfig,
    /// Web search configuration
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// `GEMINI_API_KEY` (or `GOOGLE_API_KEY`) and `TAVILY_API_KEY` are
    /// required; everything else falls back to defaults. Fails fast so a
    /// misconfigured process never starts serving.
    pub fn from_env() -> Result<Self> {
        let llm_api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("GOOGLE_API_KEY"))
            .map_err(|_| {
                Error::config("GEMINI_API_KEY (or GOOGLE_API_KEY) not set in environment")
            })?;
        let search_api_key = env::var("TAVILY_API_KEY")
            .map_err(|_| Error::config("TAVILY_API_KEY not set in environment"))?;

        let mut config = Self::default();
        config.llm.api_key = llm_api_key;
        config.search.api_key = search_api_key;

        if let Ok(host) = env::var("HC_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("HC_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid HC_PORT: {}", port)))?;
        }
        if let Ok(url) = env::var("OLLAMA_URL") {
            config.embedding.base_url = url;
        }
        if let Ok(model) = env::var("OLLAMA_EMBED_MODEL") {
            config.embedding.model = model;
        }
        if let Ok(url) = env::var("CHROMA_URL") {
            config.vector_db.base_url = url;
        }
        if let Ok(collection) = env::var("CHROMA_COLLECTION") {
            config.vector_db.collection = collection;
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.llm.model = model;
        }

        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// CORS allow-list. Only these origins may call the API.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec![
                "http://localhost".to_string(),
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

/// Embedding service (Ollama) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Ollama base URL
    pub base_url: String,
    /// Embedding model name
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "all-minilm".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Vector database (ChromaDB) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorDbConfig {
    /// ChromaDB base URL
    pub base_url: String,
    /// Collection holding the health document index
    pub collection: String,
    /// Number of nearest neighbors to retrieve per query
    pub top_k: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VectorDbConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            collection: "health_docs".to_string(),
            top_k: 7,
            timeout_secs: 30,
        }
    }
}

/// LLM (Gemini) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Generation model name
    pub model: String,
    /// API key (from GEMINI_API_KEY / GOOGLE_API_KEY)
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Maximum output tokens
    pub max_output_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key: String::new(),
            temperature: 0.4,
            max_output_tokens: 2048,
            timeout_secs: 120,
        }
    }
}

/// Web search (Tavily) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// API key (from TAVILY_API_KEY)
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Search depth ("basic" or "advanced")
    pub depth: String,
    /// Maximum number of results per search
    pub max_results: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            depth: "basic".to_string(),
            max_results: 5,
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_retrieval_contract() {
        let config = AppConfig::default();
        assert_eq!(config.vector_db.top_k, 7);
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.search.depth, "basic");
    }

    #[test]
    fn default_origins_are_local_dev_only() {
        let config = ServerConfig::default();
        assert_eq!(config.allowed_origins.len(), 3);
        assert!(config
            .allowed_origins
            .iter()
            .all(|o| o.contains("localhost") || o.contains("127.0.0.1")));
    }

    #[test]
    fn api_keys_are_not_serialized() {
        let mut config = AppConfig::default();
        config.llm.api_key = "secret-llm".to_string();
        config.search.api_key = "secret-search".to_string();

        let serialized = serde_json::to_string(&config).unwrap();
        assert!(!serialized.contains("secret-llm"));
        assert!(!serialized.contains("secret-search"));
    }
}
