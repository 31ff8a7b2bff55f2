// crates/core/src/llm/factory.rs
//! Provider factory — creates an LlmProvider from configuration.

use std::sync::Arc;

use super::config::{LlmConfig, ProviderType};
use super::huggingface::HuggingFaceProvider;
use super::provider::LlmProvider;
use super::types::LlmError;

/// Create an LLM provider based on the given configuration.
///
/// A missing API key is not an error here: the provider is still built and
/// reports `LlmError::Unauthorized` when it is asked to complete.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    match config.provider {
        ProviderType::HuggingFace => Ok(Arc::new(HuggingFaceProvider::from_config(config)?)),
    }
}
