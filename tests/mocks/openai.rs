//! Mock OpenAI chat completion API for testing
//!
//! Provides wiremock-based mocks for `POST /chat/completions` covering
//! well-formed replies, malformed replies, error statuses and slow replies.
//!
//! Expectations set with `expect_calls` are verified when the mock is dropped.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::constants::TEST_OPENAI_API_KEY;

/// Mock OpenAI server wrapper
pub struct MockOpenAI {
    server: MockServer,
}

impl MockOpenAI {
    /// Start a new mock OpenAI server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Requests the mock has seen so far
    pub async fn received_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }

    /// Reply with a single assistant choice carrying `content`, expecting `calls` hits
    pub async fn mock_completion(&self, content: &str, calls: u64) {
        self.mock_reply(chat_completion_body(content), calls).await;
    }

    /// Reply with an arbitrary JSON body and status 200
    pub async fn mock_reply(&self, body: Value, calls: u64) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", format!("Bearer {}", TEST_OPENAI_API_KEY).as_str()))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Reply with a non-success status
    pub async fn mock_status(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Reply with a 200 whose body is not JSON
    pub async fn mock_plain_text(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Reply successfully but only after `delay`
    pub async fn mock_slow_completion(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chat_completion_body("too late"))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Fail the test if the provider is called at all
    pub async fn expect_no_calls(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}

/// Well-formed chat completion body with one assistant choice
pub fn chat_completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test123",
        "object": "chat.completion",
        "created": 1706745600,
        "model": "gpt-3.5-turbo",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 9,
            "completion_tokens": 3,
            "total_tokens": 12
        }
    })
}
