#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use portfolio_chatbot::services::reply_source::{ReplySource, ReplySourceError};

/// Scripted reply source that counts how often it was asked.
pub struct ScriptedSource {
    pub behaviour: Behaviour,
    pub calls: AtomicUsize,
}

pub enum Behaviour {
    Reply(&'static str),
    Fail,
    Sleep(Duration),
    Panic,
}

impl ScriptedSource {
    pub fn new(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReplySource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn reply(&self, _message: &str) -> Result<String, ReplySourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behaviour {
            Behaviour::Reply(text) => Ok(text.to_string()),
            Behaviour::Fail => Err(ReplySourceError::Unavailable("upstream exploded".into())),
            Behaviour::Sleep(delay) => {
                tokio::time::sleep(*delay).await;
                Ok("too late".to_string())
            }
            Behaviour::Panic => panic!("reply source bug"),
        }
    }
}
