//! Service layer for the bot's business logic.
//!
//! Services sit between the gateway event handlers and the Discord API.
//! Everything that can be expressed as a pure function over model values
//! lives here, so the handlers in `bot::handler` stay thin glue around
//! network calls.

pub mod discord;
pub mod event;
