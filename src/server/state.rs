//! Application state for the query server

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::orchestrator::{OrchestratorSettings, QueryOrchestrator};
use crate::providers::{
    chroma::ChromaStore, gemini::GeminiClient, ollama::OllamaEmbedder, tavily::TavilyClient,
    EmbeddingProvider,
};

/// Shared application state: the configuration and the orchestrator
/// with its read-only provider handles. Cloning is cheap; nothing here
/// is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    orchestrator: QueryOrchestrator,
}

impl AppState {
    /// Initialize all external clients and build the orchestrator.
    ///
    /// Any client that cannot be constructed or reached makes startup
    /// fail; the process never serves with a half-initialized backend.
    pub async fn new(config: AppConfig) -> Result<Self> {
        tracing::info!("Initializing clients...");

        let embedder = Arc::new(OllamaEmbedder::new(&config.embedding)?);
        if !embedder.health_check().await? {
            return Err(Error::config(format!(
                "Embedding service not available at {}",
                config.embedding.base_url
            )));
        }
        tracing::info!(
            "Embedding client initialized ({} @ {})",
            config.embedding.model,
            config.embedding.base_url
        );

        let vector_store = Arc::new(ChromaStore::connect(&config.vector_db).await?);

        let llm = Arc::new(GeminiClient::new(&config.llm)?);
        tracing::info!("LLM client initialized ({})", config.llm.model);

        let web_search = Arc::new(TavilyClient::new(&config.search)?);
        tracing::info!("Web search client initialized (tavily)");

        let orchestrator = QueryOrchestrator::new(
            embedder,
            vector_store,
            llm,
            web_search,
            OrchestratorSettings {
                top_k: config.vector_db.top_k,
                max_web_results: config.search.max_results,
            },
        );

        tracing::info!("All clients initialized successfully");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                orchestrator,
            }),
        })
    }

    /// Get the query orchestrator
    pub fn orchestrator(&self) -> &QueryOrchestrator {
        &self.inner.orchestrator
    }

    /// Get the configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
