//! OpenAI-compatible chat-completions backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::error::InvokeError;
use crate::invoker::LlmInvoker;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4-turbo";
const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Configuration for the OpenAI-compatible backend.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Chat-completions endpoint URL.
    pub api_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Bearer token.
    pub api_key: String,
}

impl OpenAiConfig {
    /// Read configuration from the environment.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_API_URL` and `OPENAI_MODEL`
    /// override the defaults when set.
    pub fn from_env() -> Result<Self, InvokeError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| InvokeError::MissingCredentials("OPENAI_API_KEY not in environment".to_string()))?;
        Ok(OpenAiConfig {
            api_url: std::env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            api_key,
        })
    }

    /// Config for a specific endpoint and model.
    pub fn new(api_url: &str, model: &str, api_key: &str) -> Self {
        OpenAiConfig {
            api_url: api_url.to_string(),
            model: model.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// LLM invoker backed by an OpenAI-compatible HTTP endpoint.
pub struct OpenAiInvoker {
    config: OpenAiConfig,
    http_client: reqwest::Client,
}

impl OpenAiInvoker {
    /// Create a new invoker.
    pub fn new(config: OpenAiConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent("trustpipe/0.2.0")
            .build()
            .expect("Failed to create HTTP client");

        OpenAiInvoker {
            config,
            http_client,
        }
    }

    /// Create an invoker from environment variables.
    pub fn from_env() -> Result<Self, InvokeError> {
        Ok(Self::new(OpenAiConfig::from_env()?))
    }
}

#[async_trait]
impl LlmInvoker for OpenAiInvoker {
    async fn invoke(&self, prompt: &str) -> Result<String, InvokeError> {
        let request = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "sending completion request");

        let response = self
            .http_client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| InvokeError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InvokeError::Model(format!(
                "completion request returned {status}: {body}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| InvokeError::Model(format!("malformed completion response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| InvokeError::Model("completion response had no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serializes_expected_shape() {
        let request = ChatRequest {
            model: "gpt-4-turbo",
            temperature: 0.2,
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4-turbo");
        assert_eq!(json["temperature"], 0.2);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_chat_response_parses_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hi there"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "hi there");
    }

    #[test]
    fn test_config_defaults() {
        let config = OpenAiConfig::new(DEFAULT_API_URL, DEFAULT_MODEL, "sk-test");
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.model, "gpt-4-turbo");
    }
}
