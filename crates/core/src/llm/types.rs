// crates/core/src/llm/types.rs
//! Error type for LLM integration.

use thiserror::Error;

/// Answer returned when the service responds without any generated text.
pub const FALLBACK_ANSWER: &str = "Coach could not generate a response.";

/// Failures surfaced by an inference provider.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network failure, timeout, 5xx/429 status, or an unreadable body.
    #[error("Inference service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Missing API key or a key the service rejected.
    #[error("Inference service rejected credentials: {0}")]
    Unauthorized(String),

    /// The prompt was empty or the service refused the request payload.
    #[error("Invalid inference input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::ServiceUnavailable("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Inference service unavailable: HTTP 503");

        let err = LlmError::Unauthorized("HF_API_KEY not set".to_string());
        assert_eq!(
            err.to_string(),
            "Inference service rejected credentials: HF_API_KEY not set"
        );

        let err = LlmError::InvalidInput("empty prompt".to_string());
        assert_eq!(err.to_string(), "Invalid inference input: empty prompt");
    }
}
