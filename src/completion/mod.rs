//! Completion path
//!
//! Prompt extraction, reply validation and the gateway that ties them to a
//! provider.

pub mod gateway;
pub mod prompt;
pub mod types;

pub use gateway::{validate_reply, CompletionGateway};
pub use prompt::Prompt;
pub use types::{
    ChatCompletionRequest, ChatMessage, Choice, ChoiceMessage, CompleteRequest, CompleteResponse,
    CompletionResult, Role,
};
