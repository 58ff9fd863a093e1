//! Vector store provider trait

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::Result;

/// A passage retrieved from the vector store, index-aligned with its
/// metadata row.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedPassage {
    /// Document text
    pub content: String,
    /// Document metadata (source, page, ...)
    pub metadata: HashMap<String, String>,
}

/// Trait for nearest-neighbor retrieval over the document index.
///
/// The index itself is external, read-only state; this service never
/// writes to it.
///
/// Implementations:
/// - `ChromaStore`: ChromaDB over HTTP
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Return the `n_results` passages nearest to `embedding`, with
    /// documents and metadata, in similarity order.
    async fn query(&self, embedding: &[f32], n_results: usize) -> Result<Vec<RetrievedPassage>>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
