//! Completion provider abstraction
//!
//! Defines the trait interface for chat completion backends so the gateway
//! can be driven by OpenAI in production and by stubs in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::completion::ChatCompletionRequest;

/// Failure of the provider call itself.
///
/// A reply that arrives but has the wrong shape is not a `ProviderError`;
/// the gateway classifies that separately.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request to OpenAI timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("Request to OpenAI failed: {0}")]
    Request(reqwest::Error),

    #[error("OpenAI API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode OpenAI response: {0}")]
    Decode(String),

    #[error("Invalid provider configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(err)
        } else {
            ProviderError::Request(err)
        }
    }
}

/// Trait defining the interface for completion providers
///
/// # Contract
///
/// Implementations return the provider's raw JSON reply untouched. Shape
/// validation is the caller's job, which keeps "the call failed" and "the
/// reply was malformed" distinguishable.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name for logging and metrics
    fn name(&self) -> &'static str;

    /// Chat completion (non-streaming)
    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<serde_json::Value, ProviderError>;
}
