//! Completion endpoint
//!
//! `POST /complete` relays a single prompt to the provider.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use bytes::Bytes;

use crate::{
    completion::CompleteResponse,
    error::{AppError, ErrorResponse},
    routes::metrics::record_request,
    AppState,
};

/// Handle a completion request
///
/// The body is taken as raw bytes: a missing content type or malformed JSON
/// is treated like a missing prompt rather than an extractor rejection.
#[utoipa::path(
    post,
    path = "/complete",
    tag = "Completion",
    request_body = crate::completion::CompleteRequest,
    responses(
        (status = 200, description = "Completion text from the first choice", body = CompleteResponse),
        (status = 400, description = "Prompt missing, empty, or not a string", body = ErrorResponse),
        (status = 502, description = "Provider reply had an unexpected shape", body = ErrorResponse),
        (status = 500, description = "Provider call failed", body = ErrorResponse)
    )
)]
pub async fn complete(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CompleteResponse>, AppError> {
    let start_time = Instant::now();

    let result = state.gateway.handle(&body).await;

    let outcome = match &result {
        Ok(_) => "success",
        Err(e) => e.outcome(),
    };
    record_request(outcome, start_time.elapsed().as_secs_f64());

    result.map(Json)
}
