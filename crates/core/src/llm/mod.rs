// crates/core/src/llm/mod.rs
//! LLM integration for the coach.
//!
//! Provides the `LlmProvider` trait and the Hugging Face inference
//! implementation that turns a coach prompt into a text answer.

pub mod config;
pub mod factory;
pub mod huggingface;
pub mod provider;
pub mod types;

pub use config::{LlmConfig, ProviderType};
pub use factory::create_provider;
pub use huggingface::HuggingFaceProvider;
pub use provider::LlmProvider;
pub use types::{LlmError, FALLBACK_ANSWER};
