//! Mock infrastructure for testing external services
//!
//! - OpenAI chat completion API

pub mod openai;

pub use openai::*;
