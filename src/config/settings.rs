//! Application settings and Telegram configuration.

use std::path::PathBuf;

/// Telegram Bot API configuration.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot authentication token (obtain from `@BotFather`).
    pub bot_token: String,
}

impl TelegramConfig {
    /// Creates a new Telegram configuration.
    #[must_use]
    pub fn new(bot_token: String) -> Self {
        Self { bot_token }
    }

    /// Creates configuration from environment variables.
    ///
    /// Expects `BOT_TOKEN` to be set.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token =
            std::env::var("BOT_TOKEN").map_err(|_| ConfigError::MissingEnvVar("BOT_TOKEN"))?;

        Ok(Self { bot_token })
    }
}

/// Bot-specific settings.
#[derive(Debug, Clone)]
pub struct BotSettings {
    /// Port for the liveness HTTP endpoint.
    pub port: u16,

    /// Directory downloaded files are written to.
    pub download_dir: PathBuf,

    /// Base URL of the GoFile content-info API.
    pub api_base: String,
}

fn default_port() -> u16 {
    3000
}

fn default_download_dir() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_api_base() -> String {
    "https://api.gofile.io".to_owned()
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            download_dir: default_download_dir(),
            api_base: default_api_base(),
        }
    }
}

impl BotSettings {
    /// Creates bot settings from environment variables with defaults.
    ///
    /// Reads `PORT`, `DOWNLOAD_DIR` and `GOFILE_API_BASE`; absent
    /// variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => default_port(),
        };

        let download_dir =
            std::env::var("DOWNLOAD_DIR").map_or_else(|_| default_download_dir(), PathBuf::from);

        let api_base = std::env::var("GOFILE_API_BASE").unwrap_or_else(|_| default_api_base());

        Ok(Self {
            port,
            download_dir,
            api_base,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BotSettings::default();
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.download_dir, PathBuf::from("downloads"));
        assert_eq!(settings.api_base, "https://api.gofile.io");
    }

    #[test]
    fn test_telegram_config_new() {
        let config = TelegramConfig::new("123:abc".to_owned());
        assert_eq!(config.bot_token, "123:abc");
    }
}
