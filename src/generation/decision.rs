//! Routing decision parsed from LLM output
//!
//! The decision step asks the model for strict JSON, but models wrap
//! JSON in Markdown code fences or return malformed text often enough
//! that parsing is a dedicated fallible step. Callers apply the
//! failsafe (answer directly) on any error; a parse failure is never
//! surfaced to the client.

use serde::Deserialize;
use thiserror::Error;

/// How to answer the query: from local passages or via web search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Synthesize the answer from the locally retrieved passages
    AnswerDirectly,
    /// Escalate to a live web search with the given query
    SearchWeb {
        /// Search query proposed by the model
        query: String,
    },
}

/// Why a decision could not be parsed from model output
#[derive(Debug, Error)]
pub enum DecisionParseError {
    /// Output was not valid JSON after fence stripping
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// `decision` held neither expected value
    #[error("unknown decision value: {0:?}")]
    UnknownDecision(String),

    /// `SEARCH_WEB` without a usable search query
    #[error("SEARCH_WEB decision with empty search_query")]
    EmptySearchQuery,
}

#[derive(Deserialize)]
struct RawDecision {
    decision: String,
    #[serde(default)]
    search_query: String,
}

impl Decision {
    /// Parse a decision from raw model output.
    ///
    /// Strips a surrounding Markdown code fence (with or without a
    /// `json` language tag) before parsing, then validates the schema:
    /// the decision value must be one of the two known strings, and a
    /// `SEARCH_WEB` decision must carry a non-empty query.
    pub fn parse(raw: &str) -> Result<Self, DecisionParseError> {
        let cleaned = strip_code_fence(raw);
        let parsed: RawDecision = serde_json::from_str(cleaned)?;

        match parsed.decision.as_str() {
            "ANSWER_DIRECTLY" => Ok(Self::AnswerDirectly),
            "SEARCH_WEB" => {
                let query = parsed.search_query.trim();
                if query.is_empty() {
                    Err(DecisionParseError::EmptySearchQuery)
                } else {
                    Ok(Self::SearchWeb {
                        query: query.to_string(),
                    })
                }
            }
            other => Err(DecisionParseError::UnknownDecision(other.to_string())),
        }
    }
}

/// Strip a surrounding Markdown code fence from model output
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}
