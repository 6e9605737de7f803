//! Telegram client wrapper module.
//!
//! Provides the outbound messaging channel: text replies and document
//! uploads over the Bot API.

mod client;

pub use client::{LeechBot, TelegramError};
