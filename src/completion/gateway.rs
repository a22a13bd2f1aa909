//! Completion gateway
//!
//! Turns a raw request body into exactly one provider call and classifies the
//! outcome into the three error tiers of [`AppError`].

use std::sync::Arc;

use serde_json::Value;
use tracing::Instrument;

use super::{ChatCompletionRequest, CompleteResponse, CompletionResult, Prompt};
use crate::{
    error::{AppError, AppResult},
    proxy::{CompletionProvider, RequestContext},
};

/// Endpoint name used in request logs
const ENDPOINT: &str = "/complete";

/// Validate an untrusted provider reply against the completion shape.
///
/// Requires a `choices` array with at least one entry whose `message` has a
/// string `role` and a string `content`.
pub fn validate_reply(raw: Value) -> Result<CompletionResult, serde_json::Error> {
    serde_json::from_value(raw)
}

/// Stateless request handler shared by all connections
#[derive(Clone)]
pub struct CompletionGateway {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl CompletionGateway {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Handle a raw `/complete` body.
    ///
    /// Invalid input fails before the provider is touched.
    pub async fn handle(&self, body: &[u8]) -> AppResult<CompleteResponse> {
        let prompt = Prompt::from_body(body)?;
        self.complete(prompt).await
    }

    /// Run one completion for an already-validated prompt
    pub async fn complete(&self, prompt: Prompt) -> AppResult<CompleteResponse> {
        let ctx = RequestContext::new(self.provider.name(), ENDPOINT).with_model(&self.model);
        let span = ctx.create_span();

        self.relay(&ctx, prompt).instrument(span).await
    }

    async fn relay(&self, ctx: &RequestContext, prompt: Prompt) -> AppResult<CompleteResponse> {
        ctx.log_request_start(prompt.char_count());

        let request = ChatCompletionRequest::single_turn(&self.model, prompt.into_inner());
        let raw = self.provider.chat_completion(&request).await.map_err(|e| {
            ctx.log_error(&e.to_string());
            AppError::from(e)
        })?;
        ctx.log_upstream_response();

        let result = validate_reply(raw).map_err(|e| {
            ctx.log_contract_violation(&e.to_string());
            AppError::ProviderContractViolation
        })?;

        ctx.log_request_complete(result.choice_count(), result.first_content().chars().count());

        Ok(CompleteResponse {
            response: result.into_first_content(),
        })
    }
}
