//! Error types for the query service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for query-service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Query service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing keys, bad addresses)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedding generation failed
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// Internal knowledge base search failed
    #[error("Internal knowledge base search failed: {0}")]
    Retrieval(String),

    /// LLM call failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// Web search or web-path synthesis failed
    #[error("Web search failed: {0}")]
    WebSearch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create a retrieval error
    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval(message.into())
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create a web search error
    pub fn web_search(message: impl Into<String>) -> Self {
        Self::WebSearch(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Upstream failure detail goes to the log; clients get a fixed
        // detail string per failure class.
        tracing::error!("Request failed: {}", self);

        let (status, detail) = match &self {
            Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server misconfiguration."),
            Error::Embedding(_) | Error::Retrieval(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error searching the internal knowledge base.",
            ),
            Error::WebSearch(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred during the web search process.",
            ),
            Error::Llm(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while generating the answer.",
            ),
            Error::Io(_) | Error::Json(_) | Error::Http(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        };

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn retrieval_error_maps_to_500() {
        let response = Error::retrieval("hnsw index corrupt").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn embedding_error_maps_to_500() {
        let response = Error::embedding("ollama unreachable").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn web_search_error_maps_to_500() {
        let response = Error::web_search("tavily quota exceeded").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_includes_context() {
        let err = Error::llm("candidates list empty");
        assert_eq!(err.to_string(), "LLM error: candidates list empty");
    }
}
