// src/message.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Raw `/chat` body as it arrives on the wire. `message` stays optional here
/// so a missing field becomes a validation error, not a deserializer error.
#[derive(Debug, Deserialize)]
pub struct ChatPayload {
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated chat request. The message is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    message: String,
}

impl ChatRequest {
    pub fn new(message: impl AsRef<str>) -> Result<Self, AppError> {
        let trimmed = message.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("message must not be empty".to_string()));
        }
        Ok(Self {
            message: trimmed.to_string(),
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<ChatPayload> for ChatRequest {
    type Error = AppError;

    fn try_from(payload: ChatPayload) -> Result<Self, Self::Error> {
        match payload.message {
            Some(message) => ChatRequest::new(message),
            None => Err(AppError::Validation("message is required".to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub bot_name: String,
    pub reply_source: String,
    pub version: String,
}
