// crates/core/src/llm/huggingface.rs
//! Hugging Face inference API provider.
//!
//! Sends `{"inputs": prompt, "parameters": {...}}` to `<endpoint>/<model>`
//! and reads `generated_text` from the first element of the response array.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use super::config::LlmConfig;
use super::provider::LlmProvider;
use super::types::{LlmError, FALLBACK_ANSWER};

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
    return_full_text: bool,
}

/// LLM provider backed by the Hugging Face serverless inference API.
pub struct HuggingFaceProvider {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout_secs: u64,
    max_new_tokens: u32,
}

impl HuggingFaceProvider {
    /// Build a provider from configuration.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::ServiceUnavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            timeout_secs: config.timeout_secs,
            max_new_tokens: config.max_new_tokens,
        })
    }

    fn model_url(&self) -> String {
        format!("{}/{}", self.endpoint, self.model)
    }
}

/// Map a non-success HTTP status to an error kind.
fn status_error(status: StatusCode, body: &str) -> LlmError {
    let detail = format!("HTTP {}: {}", status.as_u16(), body.trim());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Unauthorized(detail),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY | StatusCode::PAYLOAD_TOO_LARGE => {
            LlmError::InvalidInput(detail)
        }
        _ => LlmError::ServiceUnavailable(detail),
    }
}

/// Pull the generated text out of an inference response body.
///
/// Text-generation models answer with `[{"generated_text": "..."}]`; some
/// deployments return the bare object. An absent or blank text falls back
/// to [`FALLBACK_ANSWER`].
fn extract_generated_text(body: &Value) -> Result<String, LlmError> {
    if let Some(err) = body.get("error").and_then(Value::as_str) {
        return Err(LlmError::ServiceUnavailable(err.to_string()));
    }

    let first = match body {
        Value::Array(items) => items.first(),
        Value::Object(_) => Some(body),
        _ => {
            return Err(LlmError::ServiceUnavailable(
                "unexpected response shape".to_string(),
            ))
        }
    };

    let text = first
        .and_then(|item| item.get("generated_text"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty());

    Ok(text.unwrap_or(FALLBACK_ANSWER).to_string())
}

#[async_trait]
impl LlmProvider for HuggingFaceProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if prompt.trim().is_empty() {
            return Err(LlmError::InvalidInput("prompt is empty".to_string()));
        }
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::Unauthorized("HF_API_KEY not set".to_string()))?;

        let start = Instant::now();
        let request = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                max_new_tokens: self.max_new_tokens,
                return_full_text: false,
            },
        };

        let response = self
            .http
            .post(self.model_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::ServiceUnavailable(format!("timed out after {}s", self.timeout_secs))
                } else {
                    LlmError::ServiceUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                model = %self.model,
                status = status.as_u16(),
                "huggingface: inference request failed"
            );
            return Err(status_error(status, &body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LlmError::ServiceUnavailable(format!("malformed response: {e}")))?;

        let text = extract_generated_text(&body)?;
        tracing::info!(
            model = %self.model,
            latency_ms = start.elapsed().as_millis() as u64,
            answer_chars = text.len(),
            "huggingface: completion received"
        );
        Ok(text)
    }

    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
