//! Command handler implementation.
//!
//! The single error boundary of the bot: every pipeline or delivery
//! failure becomes a user-visible reply, and the process keeps serving
//! subsequent commands.

use teloxide::types::ChatId;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::types::{BotCommand, CommandResult};
use crate::relay::{PATH_MARKER, Relay, RelayError};
use crate::telegram::{LeechBot, TelegramError};

/// Usage hint shown when a leech argument is rejected.
const USAGE: &str = "Please provide a valid GoFile link in the format: /leech <GoFile_Link>";

/// Failure at any step of a leech invocation.
#[derive(Debug, Error)]
enum LeechFailure {
    #[error("{0}")]
    Relay(#[from] RelayError),

    #[error("{0}")]
    Send(#[from] TelegramError),
}

/// Handles bot commands and drives the relay pipeline.
pub struct CommandHandler {
    /// The relay pipeline, shared across invocations.
    relay: Relay,

    /// Outbound messaging channel.
    bot: LeechBot,
}

impl CommandHandler {
    /// Creates a new command handler.
    #[must_use]
    pub fn new(relay: Relay, bot: LeechBot) -> Self {
        Self { relay, bot }
    }

    /// Tries to parse and execute a command from a message.
    ///
    /// Returns `None` if the message is not a command. The returned
    /// result has already been reported to the originating chat.
    pub async fn try_handle(&self, chat: ChatId, message_text: &str) -> Option<CommandResult> {
        let command = BotCommand::parse(message_text)?;

        debug!("Handling command: {}", command);
        let result = self.execute(chat, command).await;
        info!("Command result: success={}", result.success);

        if !result.message.is_empty()
            && let Err(e) = self.bot.send_text(chat, &result.message).await
        {
            warn!("Failed to deliver command reply: {}", e);
        }

        Some(result)
    }

    /// Executes a parsed command.
    async fn execute(&self, chat: ChatId, command: BotCommand) -> CommandResult {
        match command {
            BotCommand::Start => Self::handle_start(),
            BotCommand::Help => Self::handle_help(),
            BotCommand::Leech(args) => self.handle_leech(chat, &args).await,
        }
    }

    fn handle_start() -> CommandResult {
        CommandResult::success("Welcome! Use /leech <GoFile_Link> to leech a file.")
    }

    fn handle_help() -> CommandResult {
        CommandResult::success(
            "Commands:\n\
             /leech <link> - Download a GoFile link and send it here\n\
             /help - Show this help message",
        )
    }

    /// Validates the argument, runs the pipeline, forwards the file and
    /// removes the local copy.
    ///
    /// Rejections happen before any outbound HTTP call is made.
    async fn handle_leech(&self, chat: ChatId, args: &str) -> CommandResult {
        let Some(link) = validate_leech_args(args) else {
            return CommandResult::error(USAGE);
        };

        if let Err(e) = self.bot.send_text(chat, "Downloading your file...").await {
            warn!("Failed to send progress message: {}", e);
        }

        match self.run_pipeline(chat, link).await {
            // The document itself is the reply; nothing further to say.
            Ok(()) => CommandResult::success(""),
            Err(e) => CommandResult::error(format!("Failed to download or send the file: {e}")),
        }
    }

    /// Relay, forward, unlink.
    async fn run_pipeline(&self, chat: ChatId, link: &str) -> Result<(), LeechFailure> {
        let file = self.relay.relay(link).await?;
        self.bot.send_document(chat, &file.path).await?;

        // The relay succeeded; a failed unlink only leaks a local copy.
        if let Err(e) = file.remove().await {
            warn!("Failed to remove local copy: {}", e);
        }

        Ok(())
    }
}

/// Validates a leech argument: exactly one whitespace token containing
/// the share-link path marker.
///
/// Returns the link on success.
fn validate_leech_args(args: &str) -> Option<&str> {
    let mut tokens = args.split_whitespace();
    let link = tokens.next()?;

    if tokens.next().is_some() || !link.contains(PATH_MARKER) {
        return None;
    }

    Some(link)
}
