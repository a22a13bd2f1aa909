//! HTTP routes for the completion gateway
//!
//! This module defines all HTTP endpoints exposed by the service.

pub mod complete;
pub mod docs;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Prompts of any size reach the gateway
    let api_routes = Router::new().route(
        "/complete",
        post(complete::complete).layer(DefaultBodyLimit::disable()),
    );

    // Public routes (health checks, metrics, docs)
    let public_routes = Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics))
        .route("/openapi.json", get(docs::openapi_json));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Outermost layer listed first
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
