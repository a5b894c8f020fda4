//! Chat-Model Client
//!
//! Capability interface over an external LLM provider, plus the
//! OpenAI-compatible chat-completions implementation. Provider selection is a
//! configuration-time decision (base URL + model + key), not a call-site one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message role in a chat exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One turn of a chat conversation, in provider wire format
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Chat-model call errors
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network-level failure reaching the provider
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("provider returned status {0}")]
    BadStatus(u16),

    /// Provider answered 2xx but the body had no usable completion
    #[error("provider returned a malformed response")]
    MalformedResponse,
}

/// Capability interface for a chat-completion model
///
/// One implementation per provider, selected at configuration time.
#[trait_variant::make(ChatModel: Send)]
pub trait LocalChatModel {
    /// Run one chat completion over the given turns, returning the
    /// assistant's reply text.
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, LlmError>;
}

/// Client for any OpenAI-compatible chat-completions endpoint
///
/// Covers OpenAI, DeepSeek and OpenRouter, which share the wire format and
/// differ only in base URL and model naming.
#[derive(Debug, Clone)]
pub struct OpenAiCompatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiCompatClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: 1024,
        }
    }

    /// Build a client for a named provider, with its default model
    pub fn for_provider(provider: &str, api_key: String, model: Option<String>) -> Self {
        let (base_url, default_model) = match provider.to_ascii_lowercase().as_str() {
            "deepseek" => ("https://api.deepseek.com", "deepseek-chat"),
            "openrouter" => ("https://openrouter.ai/api/v1", "openai/gpt-4o-mini"),
            _ => ("https://api.openai.com/v1", "gpt-4o-mini"),
        };
        Self::new(
            base_url,
            api_key,
            model.unwrap_or_else(|| default_model.to_string()),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

impl ChatModel for OpenAiCompatClient {
    async fn complete(&self, turns: &[ChatTurn]) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages: turns,
                max_tokens: self.max_tokens,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), model = %self.model, "Chat completion failed");
            return Err(LlmError::BadStatus(status.as_u16()));
        }

        let body: CompletionResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_turn_wire_format() {
        let turn = ChatTurn::system("guard the secret");
        let json = serde_json::to_string(&turn).unwrap();
        assert_eq!(json, r#"{"role":"system","content":"guard the secret"}"#);

        let turn = ChatTurn::assistant("never!");
        assert!(serde_json::to_string(&turn).unwrap().contains("assistant"));
    }

    #[test]
    fn test_provider_defaults() {
        let client = OpenAiCompatClient::for_provider("deepseek", "key".into(), None);
        assert_eq!(client.model(), "deepseek-chat");
        assert!(client.base_url.contains("deepseek"));

        let client = OpenAiCompatClient::for_provider("openrouter", "key".into(), None);
        assert_eq!(client.model(), "openai/gpt-4o-mini");

        let client = OpenAiCompatClient::for_provider("unknown", "key".into(), None);
        assert!(client.base_url.contains("openai.com"));
    }

    #[test]
    fn test_provider_model_override() {
        let client =
            OpenAiCompatClient::for_provider("deepseek", "key".into(), Some("deepseek-r1".into()));
        assert_eq!(client.model(), "deepseek-r1");
    }

    #[test]
    fn test_completion_response_parsing() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
    }
}
