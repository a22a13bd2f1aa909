//! Configuration management for the completion gateway
//!
//! Configuration is loaded from environment variables.

use anyhow::{bail, Context, Result};
use std::env;

/// Model used when `OPENAI_MODEL` is not set
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// OpenAI API URL
    pub openai_api_url: String,
    /// OpenAI API key (required and non-blank, the gateway refuses to start without it)
    pub openai_api_key: String,
    /// Model identifier sent with every completion request
    pub model: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        if openai_api_key.trim().is_empty() {
            bail!("OPENAI_API_KEY must not be empty");
        }

        Ok(Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid GATEWAY_PORT")?,

            openai_api_url: env::var("OPENAI_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_api_key,
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }

    /// Build a config for a given provider URL, used by tests and tooling
    pub fn for_provider(openai_api_url: impl Into<String>, openai_api_key: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            openai_api_url: openai_api_url.into(),
            openai_api_key: openai_api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}
