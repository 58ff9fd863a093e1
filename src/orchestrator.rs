//! Query Orchestrator: local retrieval, routing decision, answer synthesis
//!
//! One stateless pipeline per request:
//! embed -> vector query -> decision -> {direct answer | web search -> synthesis}.
//! All external calls are sequential; the only recovery anywhere is the
//! decision-step failsafe.

use std::sync::Arc;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::generation::{citation, Decision, PromptBuilder};
use crate::providers::{
    EmbeddingProvider, LlmProvider, RetrievedPassage, VectorStoreProvider, WebSearchProvider,
};
use crate::types::response::{QueryResponse, RetrievedSource};

/// Retrieval limits for the pipeline
#[derive(Debug, Clone, Copy)]
pub struct OrchestratorSettings {
    /// Nearest neighbors requested from the vector store
    pub top_k: usize,
    /// Cap on web search results used for synthesis
    pub max_web_results: usize,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            top_k: 7,
            max_web_results: 5,
        }
    }
}

/// Stateless request pipeline over the four external collaborators.
///
/// Constructed once at startup with its dependencies; shares nothing
/// mutable across requests.
pub struct QueryOrchestrator {
    embedder: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
    llm: Arc<dyn LlmProvider>,
    web_search: Arc<dyn WebSearchProvider>,
    settings: OrchestratorSettings,
}

impl QueryOrchestrator {
    /// Create a new orchestrator from explicit dependencies
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStoreProvider>,
        llm: Arc<dyn LlmProvider>,
        web_search: Arc<dyn WebSearchProvider>,
        settings: OrchestratorSettings,
    ) -> Self {
        Self {
            embedder,
            vector_store,
            llm,
            web_search,
            settings,
        }
    }

    /// Answer a query, returning the answer and the sources behind it.
    ///
    /// Fails with `Error::Retrieval` if the local index cannot be
    /// searched and `Error::WebSearch` if the web path fails; a failed
    /// routing decision silently falls back to the direct path.
    pub async fn handle_query(&self, query: &str) -> Result<QueryResponse> {
        let start = Instant::now();
        tracing::info!("Query: \"{}\"", query);

        let (passages, local_context) = self.retrieve_local(query).await?;
        tracing::info!("Retrieved {} local passages", passages.len());

        let decision = self.decide(query, &local_context).await;

        let response = match decision {
            Decision::AnswerDirectly => {
                tracing::info!("Answering directly from documents");
                self.answer_from_documents(query, &local_context, passages)
                    .await?
            }
            Decision::SearchWeb { query: search_query } => {
                tracing::info!("Performing web search: \"{}\"", search_query);
                self.answer_from_web(query, &search_query).await?
            }
        };

        tracing::info!(
            "Query completed in {}ms, {} sources",
            start.elapsed().as_millis(),
            response.retrieved_sources_with_metadata.len()
        );

        Ok(response)
    }

    /// Embed the query and fetch the nearest passages. Any failure here
    /// is fatal to the request.
    async fn retrieve_local(&self, query: &str) -> Result<(Vec<RetrievedPassage>, String)> {
        let embedding = self
            .embedder
            .embed(query)
            .await
            .map_err(|e| Error::retrieval(e.to_string()))?;

        let passages = self
            .vector_store
            .query(&embedding, self.settings.top_k)
            .await
            .map_err(|e| Error::retrieval(e.to_string()))?;

        let local_context = PromptBuilder::join_passages(&passages);
        Ok((passages, local_context))
    }

    /// Ask the LLM whether the local passages suffice. Never fails:
    /// call or parse errors downgrade to `AnswerDirectly`.
    async fn decide(&self, query: &str, local_context: &str) -> Decision {
        let prompt = PromptBuilder::build_decision_prompt(query, local_context);

        let raw = match self.llm.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Decision call failed, defaulting to direct answer: {}", e);
                return Decision::AnswerDirectly;
            }
        };

        match Decision::parse(&raw) {
            Ok(decision) => {
                tracing::info!("Decision: {:?}", decision);
                decision
            }
            Err(e) => {
                tracing::warn!("Decision unparsable, defaulting to direct answer: {}", e);
                Decision::AnswerDirectly
            }
        }
    }

    /// Synthesize an answer from the local passages
    async fn answer_from_documents(
        &self,
        query: &str,
        local_context: &str,
        passages: Vec<RetrievedPassage>,
    ) -> Result<QueryResponse> {
        let prompt = PromptBuilder::build_direct_answer_prompt(query, local_context);
        let answer = self.llm.generate(&prompt).await?;

        let sources = passages
            .into_iter()
            .map(|p| RetrievedSource::document(p.content, p.metadata))
            .collect();

        Ok(QueryResponse::new(answer, sources))
    }

    /// Search the web and synthesize a cited answer from the results
    async fn answer_from_web(&self, query: &str, search_query: &str) -> Result<QueryResponse> {
        let mut results = self
            .web_search
            .search(search_query, self.settings.max_web_results)
            .await
            .map_err(|e| Error::web_search(e.to_string()))?;
        results.truncate(self.settings.max_web_results);

        let web_context = PromptBuilder::build_web_context(&results);
        let prompt = PromptBuilder::build_web_synthesis_prompt(query, &web_context);
        let answer = self
            .llm
            .generate(&prompt)
            .await
            .map_err(|e| Error::web_search(e.to_string()))?;

        let stray = citation::out_of_range_citations(&answer, results.len());
        if !stray.is_empty() {
            tracing::warn!(
                "Answer cites sources outside 1..={}: {:?}",
                results.len(),
                stray
            );
        }

        let sources = results
            .into_iter()
            .map(|r| RetrievedSource::web(r.content, r.url, r.title))
            .collect();

        Ok(QueryResponse::new(answer, sources))
    }
}
