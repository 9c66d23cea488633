// src/services/mod.rs
pub mod chatbot;
pub mod matching;
pub mod profile;
pub mod relay;
pub mod remote;
pub mod reply_source;

use std::sync::Arc;

use tracing::info;

use crate::config::{Config, ConfigError, ReplySourceKind};
use chatbot::PortfolioBot;
use profile::Profile;
use remote::RemoteReplySource;
use reply_source::{EchoReplySource, ReplySource};

/// Builds the reply source selected by `config`.
pub fn build_reply_source(config: &Config) -> Result<Arc<dyn ReplySource>, ConfigError> {
    match config.reply_source {
        ReplySourceKind::Rules => {
            let profile = match &config.profile_path {
                Some(path) => Profile::load(path)?,
                None => Profile::builtin()?,
            };
            info!(profile = %profile.name, "using rule-based reply source");
            Ok(Arc::new(PortfolioBot::new(profile)))
        }
        ReplySourceKind::Remote => {
            let settings = config
                .remote
                .as_ref()
                .ok_or(ConfigError::Missing("CHATBOT_AI_API_KEY"))?;
            let source = RemoteReplySource::new(settings, config.reply_timeout)?;
            info!(endpoint = %source.endpoint(), model = %settings.model, "using remote reply source");
            Ok(Arc::new(source))
        }
        ReplySourceKind::Echo => Ok(Arc::new(EchoReplySource)),
    }
}
