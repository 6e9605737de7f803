//! Configuration module for the leech bot.
//!
//! Handles loading of Telegram credentials and bot settings from the
//! process environment at startup.

mod settings;

pub use settings::{BotSettings, ConfigError, TelegramConfig};
