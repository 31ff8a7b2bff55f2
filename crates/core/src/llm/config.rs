// crates/core/src/llm/config.rs
//! LLM provider configuration types.

/// Default Hugging Face inference endpoint (model id is appended).
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

/// Default coach model.
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.3";

/// Configuration for an LLM provider instance.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: ProviderType,
    pub model: String,
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub max_new_tokens: u32,
}

/// Supported LLM provider types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    HuggingFace,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::HuggingFace,
            model: DEFAULT_MODEL.into(),
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_secs: 60,
            max_new_tokens: 512,
        }
    }
}
