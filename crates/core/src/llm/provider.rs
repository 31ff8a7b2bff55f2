// crates/core/src/llm/provider.rs
//! LlmProvider trait defining the interface for LLM integrations.

use async_trait::async_trait;

use super::types::LlmError;

/// Trait for text-in/text-out inference services.
///
/// Implementations include:
/// - `HuggingFaceProvider` — Hugging Face inference API over HTTPS
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a single prompt and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Provider name for logging/display (e.g. "huggingface").
    fn name(&self) -> &str;

    /// Model identifier (e.g. "mistralai/Mistral-7B-Instruct-v0.3").
    fn model(&self) -> &str;
}
