//! Outbound messaging channel over the Telegram Bot API.

use std::path::Path;

use teloxide::Bot;
use teloxide::prelude::Requester;
use teloxide::types::{ChatId, InputFile};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when talking to the Bot API.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Failed to send message: {0}")]
    SendMessage(#[source] teloxide::RequestError),

    #[error("Failed to send document: {0}")]
    SendDocument(#[source] teloxide::RequestError),
}

/// High-level wrapper around the Bot API client.
///
/// One long-lived instance is created at process start and cloned into
/// handlers; the underlying client is reference-counted.
#[derive(Debug, Clone)]
pub struct LeechBot {
    bot: Bot,
}

impl LeechBot {
    /// Wraps an existing Bot API client.
    #[must_use]
    pub const fn new(bot: Bot) -> Self {
        Self { bot }
    }

    /// Creates a wrapper directly from a bot token.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        Self { bot: Bot::new(token) }
    }

    /// Sends a plain text message to a chat.
    ///
    /// # Errors
    ///
    /// Returns an error if the Bot API request fails.
    pub async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), TelegramError> {
        debug!(chat = chat.0, "sending text reply");

        self.bot
            .send_message(chat, text)
            .await
            .map(|_| ())
            .map_err(TelegramError::SendMessage)
    }

    /// Sends a local file to a chat as a document attachment.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails.
    pub async fn send_document(&self, chat: ChatId, path: &Path) -> Result<(), TelegramError> {
        debug!(chat = chat.0, path = %path.display(), "sending document");

        self.bot
            .send_document(chat, InputFile::file(path.to_path_buf()))
            .await
            .map(|_| ())
            .map_err(TelegramError::SendDocument)
    }

    /// Returns a reference to the underlying client for advanced operations.
    #[must_use]
    pub const fn inner(&self) -> &Bot {
        &self.bot
    }
}
