use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::state::AppState;

/// Starts the Discord bot in a blocking manner
///
/// Builds the serenity client with the event handler and runs it until the
/// process exits. This is the only place a Discord error is allowed to be
/// fatal; per-event failures are handled inside the handlers.
///
/// # Arguments
/// - `state` - Shared bot state (config, bindings, registry)
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if client construction or the gateway connection fails
pub async fn start_bot(state: AppState) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let token = state.config.bot_token.clone();

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
