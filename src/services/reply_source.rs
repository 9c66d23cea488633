// src/services/reply_source.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplySourceError {
    #[error("reply source timed out")]
    Timeout,

    #[error("reply source unavailable: {0}")]
    Unavailable(String),
}

/// Anything that turns a user message into a reply.
///
/// Implementations are shared across requests behind an `Arc<dyn ReplySource>`
/// and must not keep per-request state.
#[async_trait]
pub trait ReplySource: Send + Sync {
    /// Short identifier used in logs and the status endpoint.
    fn name(&self) -> &'static str;

    async fn reply(&self, message: &str) -> Result<String, ReplySourceError>;
}

/// Echoes the message back.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoReplySource;

#[async_trait]
impl ReplySource for EchoReplySource {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn reply(&self, message: &str) -> Result<String, ReplySourceError> {
        Ok(format!("You said: {message}"))
    }
}
