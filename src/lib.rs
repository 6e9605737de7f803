//! GoFile Leech Bot Library
//!
//! A Telegram bot that relays GoFile-hosted files into chats.
//!
//! This crate provides the core functionality for:
//! - Parsing `/leech` commands and share links
//! - Resolving share links through the GoFile content-info API
//! - Streaming downloads to local disk and forwarding them as documents
//! - A liveness HTTP endpoint for external uptime probing

pub mod commands;
pub mod config;
pub mod relay;
pub mod server;
pub mod telegram;
