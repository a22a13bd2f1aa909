//! Completion Gateway - prompt relay for OpenAI-compatible chat APIs
//!
//! This library provides the core functionality for the gateway server:
//! boundary validation of the inbound prompt, a single provider call, and
//! translation of the outcome into a success body or one of three error tiers.

pub mod completion;
pub mod config;
pub mod docs;
pub mod error;
pub mod proxy;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::completion::CompletionGateway;
pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::proxy::{CompletionProvider, OpenAIProvider};

/// Application state shared across all request handlers
pub struct AppState {
    pub start_time: Instant,
    /// Gateway holding the provider handle created at startup
    pub gateway: CompletionGateway,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Transport defaults apply; no request timeout is imposed here
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let provider: Arc<dyn CompletionProvider> =
            Arc::new(OpenAIProvider::new(http_client, &config));

        Ok(Self::with_provider(&config, provider))
    }

    /// Create an application state around an existing provider
    ///
    /// Used by tests to inject stub providers or clients with short timeouts.
    pub fn with_provider(config: &Config, provider: Arc<dyn CompletionProvider>) -> Self {
        let gateway = CompletionGateway::new(provider, config.model.clone());

        Self {
            start_time: Instant::now(),
            gateway,
        }
    }
}
