// src/config.rs
use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_BOT_NAME: &str = "SayeesBot";
pub const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_AI_BASE_URL: &str = "https://api.mistral.ai/v1";
pub const DEFAULT_AI_MODEL: &str = "mistral-small-latest";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a friendly assistant on a personal portfolio website. \
Answer questions about the portfolio owner's education, skills, projects and contact details \
briefly and politely.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown reply source `{0}` (expected `rules`, `remote` or `echo`)")]
    UnknownReplySource(String),

    #[error("invalid value for {key}: `{value}`")]
    InvalidValue { key: &'static str, value: String },

    #[error("{0} must be set when CHATBOT_REPLY_SOURCE=remote")]
    Missing(&'static str),

    #[error("failed to read profile {path}: {source}")]
    ProfileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile: {0}")]
    Profile(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySourceKind {
    Rules,
    Remote,
    Echo,
}

impl ReplySourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplySourceKind::Rules => "rules",
            ReplySourceKind::Remote => "remote",
            ReplySourceKind::Echo => "echo",
        }
    }
}

impl FromStr for ReplySourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" => Ok(ReplySourceKind::Rules),
            "remote" => Ok(ReplySourceKind::Remote),
            "echo" => Ok(ReplySourceKind::Echo),
            _ => Err(ConfigError::UnknownReplySource(s.to_string())),
        }
    }
}

/// Settings for the OpenAI/Mistral-compatible completion endpoint.
#[derive(Clone)]
pub struct RemoteSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub system_prompt: String,
}

impl fmt::Debug for RemoteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &mask_token(&self.api_key))
            .field("model", &self.model)
            .finish()
    }
}

/// Masks a credential for logs: first 7 chars, `***`, last 4 chars.
/// Anything of 11 chars or fewer is fully masked.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}***{tail}")
}

#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind.
    pub bind_address: String,
    pub reply_source: ReplySourceKind,
    /// Time budget for one reply-source call.
    pub reply_timeout: Duration,
    /// Origins granted CORS access. Empty means any origin.
    pub allowed_origins: Vec<HeaderValue>,
    /// Profile JSON for the rule responder; the built-in profile when unset.
    pub profile_path: Option<PathBuf>,
    pub bot_name: String,
    /// Present whenever an API key is configured.
    pub remote: Option<RemoteSettings>,
    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,
    /// Emit newline-delimited JSON log records.
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND.to_string(),
            reply_source: ReplySourceKind::Rules,
            reply_timeout: DEFAULT_REPLY_TIMEOUT,
            allowed_origins: Vec::new(),
            profile_path: None,
            bot_name: DEFAULT_BOT_NAME.to_string(),
            remote: None,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a [`Config`] from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let reply_source = match get("CHATBOT_REPLY_SOURCE") {
            Some(v) => v.parse::<ReplySourceKind>()?,
            None => defaults.reply_source,
        };

        let reply_timeout = match get("CHATBOT_REPLY_TIMEOUT_MS") {
            Some(v) => parse_timeout(&v)?,
            None => defaults.reply_timeout,
        };

        let allowed_origins = match get("CHATBOT_ALLOWED_ORIGINS") {
            Some(v) => parse_origins(&v)?,
            None => defaults.allowed_origins,
        };

        let remote = get("CHATBOT_AI_API_KEY").map(|api_key| RemoteSettings {
            base_url: get("CHATBOT_AI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_AI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            model: get("CHATBOT_AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            system_prompt: get("CHATBOT_AI_SYSTEM_PROMPT")
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        });
        if reply_source == ReplySourceKind::Remote && remote.is_none() {
            return Err(ConfigError::Missing("CHATBOT_AI_API_KEY"));
        }

        let log_json = match get("CHATBOT_LOG_JSON") {
            Some(v) => parse_bool("CHATBOT_LOG_JSON", &v)?,
            None => defaults.log_json,
        };

        Ok(Self {
            bind_address: get("CHATBOT_BIND").unwrap_or(defaults.bind_address),
            reply_source,
            reply_timeout,
            allowed_origins,
            profile_path: get("CHATBOT_PROFILE_PATH").map(PathBuf::from),
            bot_name: get("CHATBOT_BOT_NAME").unwrap_or(defaults.bot_name),
            remote,
            log_level: get("CHATBOT_LOG").unwrap_or(defaults.log_level),
            log_json,
        })
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidValue {
            key: "CHATBOT_REPLY_TIMEOUT_MS",
            value: value.to_string(),
        }),
    }
}

/// Parses a comma-separated origin list. A malformed entry is an error rather
/// than silently widening the policy.
fn parse_origins(value: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let origins = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            let origin = origin.trim_end_matches('/');
            let valid_scheme = origin.starts_with("http://") || origin.starts_with("https://");
            match HeaderValue::from_str(origin) {
                Ok(header) if valid_scheme => Ok(header),
                _ => Err(ConfigError::InvalidValue {
                    key: "CHATBOT_ALLOWED_ORIGINS",
                    value: origin.to_string(),
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    // A list of only separators would otherwise fall back to any origin.
    if origins.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "CHATBOT_ALLOWED_ORIGINS",
            value: value.to_string(),
        });
    }
    Ok(origins)
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
