//! LLM provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM text generation
///
/// One prompt in, one completion out. No streaming and no function
/// calling; the decision step extracts JSON from plain text.
///
/// Implementations:
/// - `GeminiClient`: Google Generative Language API (gemini-2.5-flash)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
