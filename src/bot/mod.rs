//! Discord bot integration for event announcements.
//!
//! This module provides the gateway-facing half of the application: client
//! construction and the event handlers that react to command invocations and
//! reaction-add notifications. Connection management, rate limiting, and the
//! websocket lifecycle belong to serenity and are not handled here.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild creation, updates, and deletion
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `GUILD_MEMBERS` - Receive events about guild member changes (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` - Receive reaction add/remove events in guilds
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
