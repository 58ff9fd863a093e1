//! ChromaDB vector store client
//!
//! Talks to a ChromaDB server over its HTTP API. The collection is
//! resolved to its UUID once at startup; queries go straight to the
//! collection endpoint afterwards.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::config::VectorDbConfig;
use crate::error::{Error, Result};

use super::vector_store::{RetrievedPassage, VectorStoreProvider};

/// Vector store provider backed by a ChromaDB server
pub struct ChromaStore {
    client: Client,
    base_url: String,
    collection_name: String,
    collection_id: String,
}

#[derive(Deserialize)]
struct CollectionInfo {
    id: String,
}

#[derive(Serialize)]
struct QueryBody {
    query_embeddings: Vec<Vec<f32>>,
    n_results: usize,
    include: Vec<&'static str>,
}

#[derive(Deserialize)]
struct QueryReply {
    /// One row of documents per query embedding
    #[serde(default)]
    documents: Vec<Vec<String>>,
    /// Metadata rows, index-aligned with `documents`
    #[serde(default)]
    metadatas: Vec<Vec<Option<HashMap<String, serde_json::Value>>>>,
}

impl ChromaStore {
    /// Connect to ChromaDB and resolve the collection.
    ///
    /// Fails if the server is unreachable or the collection does not
    /// exist, which makes a missing index fatal at startup.
    pub async fn connect(config: &VectorDbConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        let url = format!(
            "{}/api/v1/collections/{}",
            config.base_url, config.collection
        );
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::retrieval(format!("ChromaDB unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::retrieval(format!(
                "Collection '{}' not found: HTTP {}",
                config.collection,
                response.status()
            )));
        }

        let info: CollectionInfo = response
            .json()
            .await
            .map_err(|e| Error::retrieval(format!("Failed to parse collection info: {}", e)))?;

        tracing::info!(
            "Connected to ChromaDB collection '{}' ({})",
            config.collection,
            info.id
        );

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            collection_name: config.collection.clone(),
            collection_id: info.id,
        })
    }

    /// Collection this store queries
    pub fn collection(&self) -> &str {
        &self.collection_name
    }
}

/// Flatten a ChromaDB metadata object to string values.
///
/// Chroma metadata values may be strings, numbers, or booleans; the
/// response contract carries `mapping(string -> string)`.
fn flatten_metadata(raw: Option<HashMap<String, serde_json::Value>>) -> HashMap<String, String> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, text)
        })
        .collect()
}

#[async_trait]
impl VectorStoreProvider for ChromaStore {
    async fn query(&self, embedding: &[f32], n_results: usize) -> Result<Vec<RetrievedPassage>> {
        let url = format!(
            "{}/api/v1/collections/{}/query",
            self.base_url, self.collection_id
        );
        let body = QueryBody {
            query_embeddings: vec![embedding.to_vec()],
            n_results,
            include: vec!["documents", "metadatas"],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::retrieval(format!("Vector query failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::retrieval(format!(
                "Vector query failed: HTTP {}",
                response.status()
            )));
        }

        let reply: QueryReply = response
            .json()
            .await
            .map_err(|e| Error::retrieval(format!("Failed to parse query response: {}", e)))?;

        // Single query embedding, so only the first row matters
        let documents = reply.documents.into_iter().next().unwrap_or_default();
        let metadatas = reply.metadatas.into_iter().next().unwrap_or_default();

        let passages = documents
            .into_iter()
            .zip(metadatas.into_iter().chain(std::iter::repeat(None)))
            .map(|(content, metadata)| RetrievedPassage {
                content,
                metadata: flatten_metadata(metadata),
            })
            .collect();

        Ok(passages)
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/v1/heartbeat", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "chromadb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flatten_metadata_stringifies_scalars() {
        let mut raw = HashMap::new();
        raw.insert("source".to_string(), json!("who_factsheet.pdf"));
        raw.insert("page".to_string(), json!(3));
        raw.insert("verified".to_string(), json!(true));

        let flat = flatten_metadata(Some(raw));

        assert_eq!(flat["source"], "who_factsheet.pdf");
        assert_eq!(flat["page"], "3");
        assert_eq!(flat["verified"], "true");
    }

    #[test]
    fn flatten_metadata_handles_missing_row() {
        assert!(flatten_metadata(None).is_empty());
    }

    #[test]
    fn query_body_requests_documents_and_metadata() {
        let body = QueryBody {
            query_embeddings: vec![vec![0.1, 0.2]],
            n_results: 7,
            include: vec!["documents", "metadatas"],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["n_results"], 7);
        assert_eq!(value["include"], json!(["documents", "metadatas"]));
        assert_eq!(value["query_embeddings"][0][1], 0.2);
    }
}
