//! OpenAI chat completion provider
//!
//! Sends single requests to `{OPENAI_API_URL}/chat/completions` and hands the
//! raw JSON reply back to the gateway.

use async_trait::async_trait;
use tracing::{debug, error, instrument};

use super::{headers::build_default_headers, CompletionProvider, ProviderError};
use crate::{completion::ChatCompletionRequest, config::Config};

/// OpenAI provider
pub struct OpenAIProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider sharing the given HTTP client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
        }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<serde_json::Value, ProviderError> {
        let url = self.chat_completions_url();
        let headers = build_default_headers(&self.api_key)?;

        debug!(url = %url, messages = request.messages.len(), "Sending request to OpenAI");

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to send request to OpenAI");
                ProviderError::from(e)
            })?;

        let status = response.status();
        debug!(url = %url, status = %status, "Received response from OpenAI");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
