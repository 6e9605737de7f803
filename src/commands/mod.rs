//! Command handling module.
//!
//! Processes user commands sent to the bot via Telegram messages and
//! turns every pipeline failure into a user-visible reply.

mod handler;
mod types;

pub use handler::CommandHandler;
pub use types::{BotCommand, CommandResult};
