//! LLM provider client for chat completions.

mod error;
mod provider;
mod types;

pub use error::LLMError;
pub use provider::{LLMProvider, OpenAICompatProvider};
pub use types::{Choice, CompletionRequest, CompletionResponse, Message, Role};
