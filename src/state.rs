// src/state.rs
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, ConfigError, DEFAULT_BOT_NAME};
use crate::services::{build_reply_source, reply_source::ReplySource};

pub type SharedState = Arc<AppState>;

/// Read-only per-process state handed to every handler.
pub struct AppState {
    pub reply_source: Arc<dyn ReplySource>,
    pub reply_timeout: Duration,
    pub bot_name: String,
}

impl AppState {
    pub fn new(reply_source: Arc<dyn ReplySource>, reply_timeout: Duration) -> Self {
        Self {
            reply_source,
            reply_timeout,
            bot_name: DEFAULT_BOT_NAME.to_string(),
        }
    }

    pub fn with_bot_name(mut self, bot_name: impl Into<String>) -> Self {
        self.bot_name = bot_name.into();
        self
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let source = build_reply_source(config)?;
        Ok(Self::new(source, config.reply_timeout).with_bot_name(config.bot_name.clone()))
    }
}
