//! Deterministic in-memory invoker for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::error::InvokeError;
use crate::invoker::LlmInvoker;

/// Invoker that replays a fixed queue of responses and records every prompt
/// it receives. Inject this in tests; wire a real backend in production.
#[derive(Debug, Default)]
pub struct ScriptedInvoker {
    responses: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion.
    pub fn push_ok(&self, text: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
    }

    /// Queue a transport failure.
    pub fn push_err(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    /// All prompts received so far, in invocation order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of invocations made so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmInvoker for ScriptedInvoker {
    async fn invoke(&self, prompt: &str) -> Result<String, InvokeError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(InvokeError::Transport(message)),
            None => Err(InvokeError::Model("scripted invoker exhausted".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_responses_in_order() {
        let invoker = ScriptedInvoker::new();
        invoker.push_ok("first");
        invoker.push_ok("second");

        assert_eq!(invoker.invoke("a").await.unwrap(), "first");
        assert_eq!(invoker.invoke("b").await.unwrap(), "second");
        assert_eq!(invoker.prompts(), vec!["a", "b"]);
        assert_eq!(invoker.call_count(), 2);
    }

    #[tokio::test]
    async fn test_queued_error_surfaces_as_transport() {
        let invoker = ScriptedInvoker::new();
        invoker.push_err("connection reset");

        let err = invoker.invoke("a").await.unwrap_err();
        assert!(matches!(err, InvokeError::Transport(_)));
        assert!(err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_exhausted_queue_is_a_model_error() {
        let invoker = ScriptedInvoker::new();
        assert!(matches!(
            invoker.invoke("a").await.unwrap_err(),
            InvokeError::Model(_)
        ));
    }
}
