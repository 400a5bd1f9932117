//! Environment-driven configuration.
//!
//! Every required variable is validated up front so a missing credential
//! fails startup with its name instead of surfacing later as an opaque API
//! error.

use {secrecy::Secret, thiserror::Error};

const ENV_BOT_TOKEN: &str = "SLACK_BOT_TOKEN";
const ENV_SIGNING_SECRET: &str = "SLACK_SIGNING_SECRET";
const ENV_MASTER_CHANNEL: &str = "MASTER_CHANNEL_ID";
const ENV_PORT: &str = "PORT";
const ENV_REQUEST_LOG: &str = "SLACK_REQUEST_LOG_ENABLED";

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

/// Runtime configuration for the bot.
#[derive(Clone)]
pub struct BotConfig {
    /// Bot User OAuth Token (xoxb-...).
    pub bot_token: Secret<String>,

    /// Signing secret for inbound request verification.
    pub signing_secret: Secret<String>,

    /// Channel whose membership is the invitation allow-list.
    pub master_channel_id: String,

    /// HTTP listen port.
    pub port: u16,

    /// Dump inbound request payloads at debug level.
    pub request_log_enabled: bool,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"[REDACTED]")
            .field("signing_secret", &"[REDACTED]")
            .field("master_channel_id", &self.master_channel_id)
            .field("port", &self.port)
            .field("request_log_enabled", &self.request_log_enabled)
            .finish()
    }
}

impl BotConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup(ENV_PORT) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid(ENV_PORT, raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bot_token: Secret::new(require(&lookup, ENV_BOT_TOKEN)?),
            signing_secret: Secret::new(require(&lookup, ENV_SIGNING_SECRET)?),
            master_channel_id: require(&lookup, ENV_MASTER_CHANNEL)?,
            port,
            request_log_enabled: lookup(ENV_REQUEST_LOG).is_some_and(|v| v == "1"),
        })
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
