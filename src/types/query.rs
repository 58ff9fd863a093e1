//! Query request types

use serde::{Deserialize, Serialize};

/// Query request posted to `/query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The health question to answer
    pub query: String,
}

impl QueryRequest {
    /// Create a new query request
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_post_body() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"query": "What is malaria?"}"#).unwrap();
        assert_eq!(request.query, "What is malaria?");
    }
}
