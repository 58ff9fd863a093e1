//! Prompt templates for routing and answer synthesis
//!
//! All prompts are built here so their shape can be asserted in tests
//! without any network calls.

use crate::providers::vector_store::RetrievedPassage;
use crate::providers::web_search::WebSearchResult;

/// Separator between passages in the local context block
pub const PASSAGE_SEPARATOR: &str = "\n\n---\n\n";

/// Substituted into the decision prompt when retrieval returned nothing
pub const NO_INFORMATION_PLACEHOLDER: &str = "No information found.";

/// Prompt builder for the query pipeline
pub struct PromptBuilder;

impl PromptBuilder {
    /// Join retrieved passage texts into the local context block
    pub fn join_passages(passages: &[RetrievedPassage]) -> String {
        passages
            .iter()
            .map(|p| p.content.as_str())
            .collect::<Vec<_>>()
            .join(PASSAGE_SEPARATOR)
    }

    /// Build the routing-decision prompt.
    ///
    /// Instructs the model to return strict JSON
    /// `{"decision", "search_query"}`. An empty context block is replaced
    /// by a literal placeholder so the model never sees an empty section.
    pub fn build_decision_prompt(query: &str, local_context: &str) -> String {
        let context = if local_context.is_empty() {
            NO_INFORMATION_PLACEHOLDER
        } else {
            local_context
        };

        format!(
            r#"You are an expert AI health assistant. A user has asked: "{query}"

I have retrieved the following information from our internal WHO knowledge base:
---
{context}
---
Based on this information, can you provide a comprehensive and confident answer?
Consider if the question is about a very recent event (e.g., "today", "this week", "2025"), a specific product/brand, or a topic clearly outside the scope of general health guidelines.

Respond with ONLY a JSON object with two keys:
1. "decision": must be either "ANSWER_DIRECTLY" or "SEARCH_WEB".
2. "search_query": If your decision is "SEARCH_WEB", provide a concise and effective search query. Otherwise, this should be an empty string."#,
            query = query,
            context = context
        )
    }

    /// Build the direct-answer prompt over local passages.
    ///
    /// Persona-constrained: answer conversationally, no preamble phrases.
    pub fn build_direct_answer_prompt(query: &str, local_context: &str) -> String {
        format!(
            r#"You are 'Your Health Compass,' a knowledgeable and empathetic AI health guide. Your role is to synthesize information from the provided trusted documents to answer the user's question.

CRITICAL INSTRUCTION: Begin your answer directly and conversationally. Do not start your response with phrases like "According to the documents" or "Based on the provided information". Get straight to the point.

For example, if the user asks "What are the symptoms of malaria?", a good start would be "The main symptoms of malaria typically include:".

DOCUMENTS:
{context}

USER'S QUESTION: {query}"#,
            context = local_context,
            query = query
        )
    }

    /// Build the numbered web context block.
    ///
    /// Results are 1-indexed in provider order; the synthesis prompt's
    /// `[Source X]` citations refer to these numbers.
    pub fn build_web_context(results: &[WebSearchResult]) -> String {
        results
            .iter()
            .enumerate()
            .map(|(i, r)| format!("Source {} URL: {}\nContent: {}", i + 1, r.url, r.content))
            .collect::<Vec<_>>()
            .join(PASSAGE_SEPARATOR)
    }

    /// Build the web-synthesis prompt requiring inline `[Source X]`
    /// citations in Markdown link syntax.
    pub fn build_web_synthesis_prompt(query: &str, web_context: &str) -> String {
        format!(
            r#"You are an expert AI health assistant. A user asked: "{query}"
Your internal knowledge was insufficient, so you performed a web search.

Based ONLY on the following web search results, provide a clear, comprehensive, and well-formatted answer using Markdown.

CRITICAL INSTRUCTION: For every piece of information or claim in your answer, you MUST cite the relevant source number. The citation must be a Markdown link formatted exactly as `[Source X]`, where X is the number corresponding to the source URL.

For example:
- "The Sabin Vaccine Institute launched a Phase 2 trial [Source 1]."
- "This was considered critical due to growing outbreaks [Source 3]."
- "Multiple candidates are in trials [Source 1][Source 3]."

Do not use parentheses for the URL; the frontend will handle it. Just use the `[Source X]` format.
WEB SEARCH RESULTS:
{context}"#,
            query = query,
            context = web_context
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn passage(content: &str) -> RetrievedPassage {
        RetrievedPassage {
            content: content.to_string(),
            metadata: HashMap::new(),
        }
    }

    #[test]
    fn join_passages_uses_fixed_separator() {
        let passages = vec![passage("first"), passage("second"), passage("third")];
        assert_eq!(
            PromptBuilder::join_passages(&passages),
            "first\n\n---\n\nsecond\n\n---\n\nthird"
        );
    }

    #[test]
    fn join_passages_empty_is_empty_string() {
        assert_eq!(PromptBuilder::join_passages(&[]), "");
    }

    #[test]
    fn decision_prompt_embeds_query_and_context() {
        let prompt = PromptBuilder::build_decision_prompt(
            "What is malaria?",
            "Malaria is a mosquito-borne disease.",
        );
        assert!(prompt.contains("\"What is malaria?\""));
        assert!(prompt.contains("Malaria is a mosquito-borne disease."));
        assert!(prompt.contains("ANSWER_DIRECTLY"));
        assert!(prompt.contains("SEARCH_WEB"));
    }

    #[test]
    fn decision_prompt_substitutes_placeholder_for_empty_context() {
        let prompt = PromptBuilder::build_decision_prompt("What is malaria?", "");
        assert!(prompt.contains(NO_INFORMATION_PLACEHOLDER));
        // The context block must never be empty
        assert!(!prompt.contains("---\n\n---"));
    }

    #[test]
    fn direct_answer_prompt_forbids_preamble() {
        let prompt = PromptBuilder::build_direct_answer_prompt("What is malaria?", "docs");
        assert!(prompt.contains("Your Health Compass"));
        assert!(prompt.contains("Do not start your response with phrases"));
        assert!(prompt.contains("USER'S QUESTION: What is malaria?"));
    }

    #[test]
    fn web_context_is_one_indexed_in_result_order() {
        let results = vec![
            WebSearchResult {
                url: "https://a.example".to_string(),
                title: "A".to_string(),
                content: "alpha".to_string(),
            },
            WebSearchResult {
                url: "https://b.example".to_string(),
                title: "B".to_string(),
                content: "beta".to_string(),
            },
        ];
        let context = PromptBuilder::build_web_context(&results);
        assert!(context.starts_with("Source 1 URL: https://a.example\nContent: alpha"));
        assert!(context.contains("Source 2 URL: https://b.example\nContent: beta"));
    }

    #[test]
    fn synthesis_prompt_requires_source_citations() {
        let prompt = PromptBuilder::build_web_synthesis_prompt("query", "context");
        assert!(prompt.contains("`[Source X]`"));
        assert!(prompt.contains("Do not use parentheses for the URL"));
    }
}
