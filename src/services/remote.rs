// src/services/remote.rs
//! Reply source backed by an OpenAI/Mistral-compatible chat completion API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::reply_source::{ReplySource, ReplySourceError};
use crate::config::{ConfigError, RemoteSettings};

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [CompletionMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RemoteReplySource {
    client: reqwest::Client,
    endpoint: String,
    settings: RemoteSettings,
}

impl RemoteReplySource {
    /// `timeout` bounds the whole HTTP exchange, body included.
    pub fn new(settings: &RemoteSettings, timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            settings: settings.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn classify(err: reqwest::Error) -> ReplySourceError {
    if err.is_timeout() {
        ReplySourceError::Timeout
    } else {
        ReplySourceError::Unavailable(err.to_string())
    }
}

#[async_trait]
impl ReplySource for RemoteReplySource {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn reply(&self, message: &str) -> Result<String, ReplySourceError> {
        let body = CompletionRequest {
            model: &self.settings.model,
            messages: [
                CompletionMessage {
                    role: "system",
                    content: &self.settings.system_prompt,
                },
                CompletionMessage {
                    role: "user",
                    content: message,
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReplySourceError::Unavailable(format!(
                "completion endpoint returned {status}"
            )));
        }

        let completion: CompletionResponse = response.json().await.map_err(classify)?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                ReplySourceError::Unavailable("completion contained no reply".to_string())
            })?;

        debug!(model = %self.settings.model, reply_len = content.len(), "completion received");
        Ok(content)
    }
}
