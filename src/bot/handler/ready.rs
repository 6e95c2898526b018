//! Ready event handler for bot initialization.
//!
//! Fires when the bot completes the gateway handshake. Startup work that must
//! precede reaction routing happens here: synchronizing the guild's command
//! set and resolving the emoji-to-role bindings. Reactions arriving before
//! resolution completes fail the binding guard and are ignored.

use serenity::all::{
    ActivityData, CommandOptionType, Context, CreateCommand, CreateCommandOption, GuildId, Ready,
};

use crate::service::discord::role::resolve_bindings;
use crate::state::AppState;

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Organizing events")));

    let guild_id = GuildId::new(state.config.guild_id);

    if let Err(e) = guild_id.set_commands(&ctx.http, vec![create_command()]).await {
        tracing::error!("Failed to sync commands for guild {}: {}", guild_id, e);
    } else {
        tracing::info!("Synced commands for guild {}", guild_id);
    }

    match ctx.http.get_guild_roles(guild_id).await {
        Ok(roles) => {
            let bindings = resolve_bindings(
                &roles,
                &state.config.role_name_join,
                &state.config.role_name_spec,
            );
            *state.bindings.write().await = bindings;
            tracing::info!("Resolved role bindings: {:?}", bindings);
        }
        Err(e) => {
            // Reactions stay guard-rejected until a later resolution succeeds.
            tracing::error!("Failed to fetch roles for guild {}: {}", guild_id, e);
        }
    }
}

/// Definition of the `/create` guild command.
fn create_command() -> CreateCommand {
    CreateCommand::new("create")
        .description("Create an event")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "event_name", "Name of the event")
                .required(true),
        )
}
