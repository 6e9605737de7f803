//! Command types and definitions.

use std::fmt;

/// Available bot commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Greeting and usage hint.
    Start,

    /// Show help information.
    Help,

    /// Relay a GoFile link into the chat. Carries the raw argument text,
    /// validated later at the command boundary.
    Leech(String),
}

impl BotCommand {
    /// Parses a command from a message text.
    ///
    /// Returns `None` if the message is not a command this bot knows.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        if !text.starts_with('/') {
            return None;
        }

        let (cmd, args) = match text.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd, args.trim()),
            None => (text, ""),
        };

        // Tolerate the `/command@BotName` form used in group chats.
        let cmd = cmd.split('@').next().unwrap_or(cmd).to_lowercase();

        match cmd.as_str() {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            "/leech" => Some(Self::Leech(args.to_owned())),
            _ => None,
        }
    }

    /// Returns the command name as it appears in help.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Leech(_) => "leech",
        }
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leech(args) => write!(f, "leech {args}"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Result of command execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command was successful.
    pub success: bool,

    /// Response message to show the user. Empty when the reply was
    /// already delivered another way (e.g. as a document).
    pub message: String,
}

impl CommandResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Creates an error result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        assert_eq!(BotCommand::parse("/start"), Some(BotCommand::Start));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(BotCommand::parse("/help"), Some(BotCommand::Help));
    }

    #[test]
    fn test_parse_leech_with_arg() {
        assert_eq!(
            BotCommand::parse("/leech https://gofile.io/d/ABC123"),
            Some(BotCommand::Leech("https://gofile.io/d/ABC123".to_owned()))
        );
    }

    #[test]
    fn test_parse_leech_without_arg() {
        assert_eq!(
            BotCommand::parse("/leech"),
            Some(BotCommand::Leech(String::new()))
        );
    }

    #[test]
    fn test_parse_leech_extra_tokens_preserved() {
        assert_eq!(
            BotCommand::parse("/leech one two"),
            Some(BotCommand::Leech("one two".to_owned()))
        );
    }

    #[test]
    fn test_parse_bot_name_suffix() {
        assert_eq!(
            BotCommand::parse("/leech@LeechBot https://gofile.io/d/ABC123"),
            Some(BotCommand::Leech("https://gofile.io/d/ABC123".to_owned()))
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(BotCommand::parse("/START"), Some(BotCommand::Start));
    }

    #[test]
    fn test_parse_non_command() {
        assert_eq!(BotCommand::parse("hello there"), None);
        assert_eq!(BotCommand::parse("/unknown"), None);
        assert_eq!(BotCommand::parse(""), None);
    }

    #[test]
    fn test_parse_with_extra_whitespace() {
        assert_eq!(
            BotCommand::parse("  /leech   https://gofile.io/d/X  "),
            Some(BotCommand::Leech("https://gofile.io/d/X".to_owned()))
        );
    }
}
