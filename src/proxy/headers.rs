//! Header utilities for provider requests
//!
//! Client headers are never forwarded upstream; every provider request gets
//! the same minimal header set.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use super::ProviderError;

/// Build default headers for provider requests
pub fn build_default_headers(api_key: &str) -> Result<HeaderMap, ProviderError> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|_| ProviderError::Config("API key contains invalid header characters".to_string()))?;
    auth.set_sensitive(true);

    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}
