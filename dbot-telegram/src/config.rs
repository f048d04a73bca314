//! Minimal bot config: token, API URL, log path and polling options.
//! Loaded from BOT_TOKEN, TELEGRAM_API_URL / TELOXIDE_API_URL, LOG_FILE, DROP_PENDING_UPDATES.

use anyhow::Result;
use std::env;
use tracing::error;

pub const DEFAULT_LOG_FILE: &str = "logs/dbot.log";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    /// Skip updates queued while the bot was offline.
    pub drop_pending_updates: bool,
}

impl TelegramConfig {
    /// Loads from the environment. BOT_TOKEN is required.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Loads from the environment; `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let drop_pending_updates = match env::var("DROP_PENDING_UPDATES") {
            Ok(v) => parse_bool(&v).ok_or_else(|| {
                anyhow::anyhow!("DROP_PENDING_UPDATES must be true or false, got: {}", v)
            })?,
            Err(_) => true,
        };
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file: log_file_from_env(),
            drop_pending_updates,
        })
    }

    /// Uses the given token; everything else defaults.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
            drop_pending_updates: true,
        }
    }

    /// telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Builds the teloxide client, pointing it at the custom API URL when one is configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str).map_err(|e| {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL");
                    anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e)
                })?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

/// LOG_FILE or the default path. Read separately so logging can start before the rest of the config.
pub fn log_file_from_env() -> String {
    env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
