//! Wire types for the completion path
//!
//! Inbound (`CompleteRequest`/`CompleteResponse`) and outbound
//! (`ChatCompletionRequest`/`CompletionResult`) shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role of an outbound message. Requests are single-turn, so only the user
/// role is ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// Chat message sent to the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat completion request sent upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Single-turn request carrying one user message
    pub fn single_turn(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

/// Message inside a provider choice.
///
/// The role is kept as a plain string since providers add roles over time,
/// but it must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub role: String,
    pub content: String,
}

/// One candidate completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

/// The part of a provider reply the gateway relies on.
///
/// Only the first choice is typed strictly; later ones are kept as raw JSON
/// so an odd trailing choice cannot fail an otherwise usable reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompletionResult {
    #[serde(deserialize_with = "first_choice_strict")]
    pub choices: (Choice, Vec<serde_json::Value>),
}

fn first_choice_strict<'de, D>(deserializer: D) -> Result<(Choice, Vec<serde_json::Value>), D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let mut raw: Vec<serde_json::Value> = Vec::deserialize(deserializer)?;
    if raw.is_empty() {
        return Err(D::Error::custom("choices must not be empty"));
    }
    let first = raw.remove(0);
    let first: Choice = serde_json::from_value(first).map_err(D::Error::custom)?;
    Ok((first, raw))
}

impl CompletionResult {
    /// Content of the first choice
    pub fn first_content(&self) -> &str {
        &self.choices.0.message.content
    }

    /// Consume the result, keeping only the first choice's content
    pub fn into_first_content(self) -> String {
        self.choices.0.message.content
    }

    /// Number of choices the provider returned
    pub fn choice_count(&self) -> usize {
        1 + self.choices.1.len()
    }
}

/// Body accepted by `POST /complete`
///
/// Documentation only: the handler reads the body as untyped JSON so that a
/// bad prompt always maps to the same 400.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompleteRequest {
    /// Text to complete
    #[schema(example = "hello")]
    pub prompt: String,
}

/// Successful `POST /complete` reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompleteResponse {
    /// First choice's message content, unchanged
    #[schema(example = "hi there")]
    pub response: String,
}
