//! OpenAPI specification for the gateway
//!
//! Aggregates the completion endpoint and its schemas into a single OpenAPI
//! document.

use utoipa::OpenApi;

use crate::{
    completion::{CompleteRequest, CompleteResponse},
    error::ErrorResponse,
};

/// OpenAPI specification for the completion gateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Completion Gateway API",
        version = "0.1.0",
        description = "Relays a single prompt to an OpenAI-compatible chat completion API"
    ),
    paths(crate::routes::complete::complete),
    components(schemas(CompleteRequest, CompleteResponse, ErrorResponse)),
    tags(
        (name = "Completion", description = "Prompt completion endpoint")
    )
)]
pub struct GatewayApiDoc;
