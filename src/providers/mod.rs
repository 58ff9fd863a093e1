//! Provider abstractions for the four external collaborators
//!
//! Each external service is reached through a trait so the orchestrator
//! can be exercised with in-memory fakes and a concrete client can be
//! swapped without touching the request path.

pub mod chroma;
pub mod embedding;
pub mod gemini;
pub mod llm;
pub mod ollama;
pub mod tavily;
pub mod vector_store;
pub mod web_search;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use vector_store::{RetrievedPassage, VectorStoreProvider};
pub use web_search::{WebSearchProvider, WebSearchResult};
