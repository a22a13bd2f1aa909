//! Inbound prompt extraction
//!
//! The request body is untrusted and loosely typed. It is parsed once here
//! into a non-empty `Prompt`; everything after this point works with the
//! typed value.

use serde_json::Value;

use crate::error::AppError;

/// A non-empty prompt supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Validate a prompt string
    pub fn new(text: impl Into<String>) -> Result<Self, AppError> {
        let text = text.into();
        if text.is_empty() {
            return Err(AppError::MissingInput);
        }
        Ok(Self(text))
    }

    /// Extract the prompt from a raw request body.
    ///
    /// Bodies that are not JSON are treated like an empty object.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Err(AppError::MissingInput),
        }
    }

    /// Extract the `prompt` field from an already-parsed body
    pub fn from_value(body: &Value) -> Result<Self, AppError> {
        match body.get("prompt") {
            Some(Value::String(text)) => Self::new(text.as_str()),
            _ => Err(AppError::MissingInput),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Length in characters, for logging
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}
