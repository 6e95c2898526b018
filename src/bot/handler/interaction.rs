//! Slash command handling.

use serenity::all::{
    CommandDataOptionValue, CommandInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, Interaction, ReactionType,
};

use crate::model::event::ReactionChoice;
use crate::service::discord::{member::member_has_named_role, role::resolve_bindings};
use crate::service::event::embed::build_event_embed;
use crate::state::AppState;

/// Reply sent when a non-admin invokes `/create`.
const PERMISSION_DENIED: &str = "You don't have permission to create an event!";

/// Handle slash command invocations
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.data.name == "create" {
        handle_create(state, &ctx, &command).await;
    }
}

/// Handles the `/create` command.
///
/// Gated on the configured admin role. On success posts the event embed as
/// the interaction response, seeds the three reaction options in order,
/// re-resolves the role bindings from the freshly fetched role list, and
/// registers the message as the current event. A rejected invocation gets a
/// plain-text reply and mutates nothing.
async fn handle_create(state: &AppState, ctx: &Context, command: &CommandInteraction) {
    let Some(guild_id) = command.guild_id else {
        return;
    };
    let Some(member) = command.member.as_deref() else {
        return;
    };

    let guild_roles = match ctx.http.get_guild_roles(guild_id).await {
        Ok(roles) => roles,
        Err(e) => {
            tracing::error!("Failed to fetch roles for guild {}: {}", guild_id, e);
            return;
        }
    };

    if !member_has_named_role(&member.roles, &guild_roles, &state.config.role_name_admin) {
        respond_text(ctx, command, PERMISSION_DENIED).await;
        return;
    }

    let Some(event_name) = event_name_option(command) else {
        tracing::warn!("Create command invoked without an event_name option");
        return;
    };

    let embed = build_event_embed(&event_name, &[], &[]);
    let response =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(embed));
    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to post event message: {}", e);
        return;
    }

    let message = match command.get_response(&ctx.http).await {
        Ok(message) => message,
        Err(e) => {
            tracing::error!("Failed to fetch posted event message: {}", e);
            return;
        }
    };

    for choice in ReactionChoice::ALL {
        let emoji = ReactionType::Unicode(choice.emoji().to_string());
        if let Err(e) = message.react(&ctx.http, emoji).await {
            tracing::warn!("Failed to seed {} reaction: {}", choice.emoji(), e);
        }
    }

    // Re-resolve from the role list fetched for the permission check, so
    // renames since the last event are picked up.
    *state.bindings.write().await = resolve_bindings(
        &guild_roles,
        &state.config.role_name_join,
        &state.config.role_name_spec,
    );

    state.registry.write().await.register(message.id);

    tracing::info!("Created event '{}' as message {}", event_name, message.id);
}

async fn respond_text(ctx: &Context, command: &CommandInteraction, content: &str) {
    let response =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content));
    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to send rejection reply: {}", e);
    }
}

fn event_name_option(command: &CommandInteraction) -> Option<String> {
    command
        .data
        .options
        .iter()
        .find_map(|option| match (option.name.as_str(), &option.value) {
            ("event_name", CommandDataOptionValue::String(value)) => Some(value.clone()),
            _ => None,
        })
}
