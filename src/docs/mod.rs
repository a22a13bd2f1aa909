//! OpenAPI documentation

pub mod openapi;

pub use openapi::GatewayApiDoc;
