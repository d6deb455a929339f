//! The opaque LLM invocation capability.
//!
//! The pipeline consumes language models through the single narrow
//! [`LlmInvoker`] trait: text prompt in, text completion out. Backends can
//! be substituted without touching pipeline logic. No retry or streaming
//! semantics are assumed; a failed invocation surfaces as [`InvokeError`].

use async_trait::async_trait;

use crate::domain::error::InvokeError;

pub mod openai;
pub mod scripted;

pub use openai::{OpenAiConfig, OpenAiInvoker};
pub use scripted::ScriptedInvoker;

/// One-shot text completion capability.
#[async_trait]
pub trait LlmInvoker: Send + Sync {
    /// Send one prompt and return the model's text completion.
    async fn invoke(&self, prompt: &str) -> Result<String, InvokeError>;
}
