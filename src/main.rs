//! GoFile Leech Bot - Main Entry Point
//!
//! Accepts `/leech <GoFile_Link>` commands, downloads the linked file
//! and forwards it to the requesting chat as a document.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use teloxide::Bot;
use teloxide::types::Message;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gofile_leech_bot::commands::CommandHandler;
use gofile_leech_bot::config::{BotSettings, TelegramConfig};
use gofile_leech_bot::relay::Relay;
use gofile_leech_bot::server;
use gofile_leech_bot::telegram::LeechBot;

/// Seconds to wait for a connection to be established.
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Seconds to wait for a download to complete before giving up.
const READ_TIMEOUT_SECS: u64 = 300;

/// Telegram bot that relays GoFile-hosted files into chats.
#[derive(Parser, Debug)]
#[command(name = "gofile_leech_bot")]
#[command(about = "Relay GoFile links into Telegram chats")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Directory downloaded files are written to (overrides DOWNLOAD_DIR).
    #[arg(short, long)]
    download_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    // Load environment variables
    if let Err(e) = dotenvy::from_filename(&args.env_file) {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    let tg_config = TelegramConfig::from_env()
        .context("Failed to load Telegram configuration from environment")?;

    let mut settings =
        BotSettings::from_env().context("Failed to load bot settings from environment")?;
    if let Some(dir) = args.download_dir {
        settings.download_dir = dir.into();
    }

    info!(
        "Loaded settings (port: {}, download_dir: {}, api_base: {})",
        settings.port,
        settings.download_dir.display(),
        settings.api_base
    );

    let http = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .build()
        .context("Failed to build HTTP client")?;

    let relay = Relay::new(
        http,
        settings.api_base.clone(),
        settings.download_dir.clone(),
    );
    let bot = Bot::new(tg_config.bot_token);
    let handler = Arc::new(CommandHandler::new(relay, LeechBot::new(bot.clone())));

    // Liveness endpoint for external uptime probes
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.port))
        .await
        .with_context(|| format!("Failed to bind liveness port {}", settings.port))?;
    info!("Liveness endpoint listening on port {}", settings.port);
    let server_task = tokio::spawn(server::serve(listener));

    info!("Starting leech bot...");

    teloxide::repl(bot, move |_bot: Bot, msg: Message| {
        let handler = Arc::clone(&handler);
        async move {
            if let Some(text) = msg.text() {
                handler.try_handle(msg.chat.id, text).await;
            }
            Ok(())
        }
    })
    .await;

    info!("Shutting down...");
    server_task.abort();

    Ok(())
}

/// Initializes the logging subsystem.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
