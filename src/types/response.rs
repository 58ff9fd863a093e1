//! Query response types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of a retrieved source: local document or live web result.
///
/// On the wire the kind travels inside `metadata["type"]` so the response
/// shape stays exactly what the frontend consumes; this enum gives typed
/// access internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Passage retrieved from the local document index
    Document,
    /// Result returned by the web search provider
    Web,
}

impl SourceKind {
    /// Wire representation, as stored in `metadata["type"]`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Web => "web",
        }
    }
}

/// A single source returned alongside the answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedSource {
    /// Passage or snippet text
    pub content: String,
    /// Source metadata; always carries a `"type"` key
    pub metadata: HashMap<String, String>,
}

impl RetrievedSource {
    /// Build a source from a local index passage, preserving its metadata.
    pub fn document(content: impl Into<String>, mut metadata: HashMap<String, String>) -> Self {
        metadata.insert("type".to_string(), SourceKind::Document.as_str().to_string());
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Build a source from a web search result. The URL lands in
    /// `metadata["source"]` and the provider title in `metadata["title"]`.
    pub fn web(
        content: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let mut metadata = HashMap::new();
        metadata.insert("source".to_string(), url.into());
        metadata.insert("title".to_string(), title.into());
        metadata.insert("type".to_string(), SourceKind::Web.as_str().to_string());
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Typed view of `metadata["type"]`
    pub fn kind(&self) -> Option<SourceKind> {
        match self.metadata.get("type").map(String::as_str) {
            Some("document") => Some(SourceKind::Document),
            Some("web") => Some(SourceKind::Web),
            _ => None,
        }
    }
}

/// Response returned by `POST /query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Markdown answer, possibly containing `[Source N]` citations
    pub answer: String,
    /// Sources used to build the answer, in retrieval/result order
    pub retrieved_sources_with_metadata: Vec<RetrievedSource>,
}

impl QueryResponse {
    /// Create a new response
    pub fn new(answer: impl Into<String>, sources: Vec<RetrievedSource>) -> Self {
        Self {
            answer: answer.into(),
            retrieved_sources_with_metadata: sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_source_preserves_metadata_and_tags_type() {
        let mut metadata = HashMap::new();
        metadata.insert("source".to_string(), "who_malaria_factsheet.pdf".to_string());
        metadata.insert("page".to_string(), "3".to_string());

        let source = RetrievedSource::document("Malaria is caused by parasites.", metadata);

        assert_eq!(source.kind(), Some(SourceKind::Document));
        assert_eq!(source.metadata["type"], "document");
        assert_eq!(source.metadata["source"], "who_malaria_factsheet.pdf");
        assert_eq!(source.metadata["page"], "3");
    }

    #[test]
    fn web_source_carries_url_and_title() {
        let source = RetrievedSource::web(
            "A Phase 2 trial launched this week.",
            "https://example.org/news",
            "Vaccine trial news",
        );

        assert_eq!(source.kind(), Some(SourceKind::Web));
        assert_eq!(source.metadata["type"], "web");
        assert_eq!(source.metadata["source"], "https://example.org/news");
        assert_eq!(source.metadata["title"], "Vaccine trial news");
    }

    #[test]
    fn wire_shape_has_only_content_and_metadata() {
        let source = RetrievedSource::web("snippet", "https://example.org", "title");
        let value = serde_json::to_value(&source).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert!(object.contains_key("content"));
        assert!(object.contains_key("metadata"));
        // The kind lives inside metadata, not as a top-level field
        assert_eq!(value["metadata"]["type"], "web");
    }

    #[test]
    fn response_serializes_expected_field_names() {
        let response = QueryResponse::new("Answer text", vec![]);
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("answer").is_some());
        assert!(value.get("retrieved_sources_with_metadata").is_some());
    }
}
