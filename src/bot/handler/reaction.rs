//! Reaction routing for event messages.
//!
//! Every reaction-add notification in the guild lands here. Recognized
//! reactions on the current event message are translated into role grants
//! and revocations, the roster embed is re-rendered, and the triggering
//! reaction is retracted so the message keeps showing only the canonical
//! choice set. Everything else is ignored without error.

use serenity::all::{Context, EditMessage, Member, Reaction, ReactionType, RoleId};

use crate::model::event::{ReactionChoice, RoleBindings};
use crate::service::event::{embed::build_event_embed, roster};
use crate::state::AppState;

/// Routes a raw reaction-add notification.
///
/// Transition rules, in order:
/// 1. Guards: the bot's own reactions, untracked messages, unbound emoji,
///    and unresolvable guilds/members are no-ops.
/// 2. ❌ revokes whichever bound roles the member holds, granting nothing.
/// 3. ✋/👀 revoke the mutually exclusive counterpart role if held, then
///    grant the target role.
/// 4. After a successful mutation the roster embed is re-rendered.
/// 5. The triggering reaction is always retracted.
pub async fn handle_reaction_add(state: &AppState, ctx: Context, reaction: Reaction) {
    let Some(user_id) = reaction.user_id else {
        return;
    };
    if user_id == ctx.cache.current_user().id {
        return;
    }
    if !state.registry.read().await.is_event(reaction.message_id) {
        return;
    }
    let Some(guild_id) = reaction.guild_id else {
        return;
    };
    let ReactionType::Unicode(emoji) = &reaction.emoji else {
        return;
    };
    let Some(choice) = ReactionChoice::from_unicode(emoji) else {
        return;
    };

    let bindings = *state.bindings.read().await;

    // Join/spectate reactions without a resolved binding are inert, like any
    // unbound emoji. Cancel is defined by what the member holds instead.
    if bindings.role_for(choice).is_none() && choice != ReactionChoice::Cancel {
        return;
    }

    let member = match guild_id.member(&ctx.http, user_id).await {
        Ok(member) => member,
        Err(e) => {
            tracing::debug!("Ignoring reaction from unresolvable member {}: {}", user_id, e);
            return;
        }
    };

    let mutated = apply_transition(&ctx, &member, bindings, choice).await;

    if mutated {
        update_event_message(&ctx, &reaction).await;
    }

    // Cleanup runs regardless of how the transition went; a failed delete is
    // swallowed like any other cleanup failure.
    if let Err(e) = reaction.delete(&ctx.http).await {
        tracing::warn!(
            "Failed to retract reaction on message {}: {}",
            reaction.message_id,
            e
        );
    }
}

/// Applies the role effect for a recognized choice.
///
/// # Returns
/// - `true` - At least one grant or revoke succeeded; the roster changed
/// - `false` - Nothing to do, or every mutation was rejected by Discord
async fn apply_transition(
    ctx: &Context,
    member: &Member,
    bindings: RoleBindings,
    choice: ReactionChoice,
) -> bool {
    match choice {
        ReactionChoice::Cancel => {
            let held: Vec<RoleId> = [bindings.join, bindings.spectate]
                .into_iter()
                .flatten()
                .filter(|role_id| member.roles.contains(role_id))
                .collect();

            let mut mutated = false;
            for role_id in held {
                mutated |= remove_role(ctx, member, role_id).await;
            }
            mutated
        }
        ReactionChoice::Join | ReactionChoice::Spectate => {
            let Some(target) = bindings.role_for(choice) else {
                return false;
            };

            let mut mutated = false;

            // Exclusivity: a member is never joined and spectating at once.
            if let Some(other) = bindings.exclusive_counterpart(choice) {
                if member.roles.contains(&other) {
                    mutated |= remove_role(ctx, member, other).await;
                }
            }

            mutated |= add_role(ctx, member, target).await;
            mutated
        }
    }
}

async fn add_role(ctx: &Context, member: &Member, role_id: RoleId) -> bool {
    match member.add_role(&ctx.http, role_id).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                "Failed to grant role {} to member {}: {}",
                role_id,
                member.user.id,
                e
            );
            false
        }
    }
}

async fn remove_role(ctx: &Context, member: &Member, role_id: RoleId) -> bool {
    match member.remove_role(&ctx.http, role_id).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                "Failed to revoke role {} from member {}: {}",
                role_id,
                member.user.id,
                e
            );
            false
        }
    }
}

/// Re-renders the event embed from the message's current reactions.
///
/// A failed fetch or edit skips the re-render; the caller still performs
/// reaction cleanup.
async fn update_event_message(ctx: &Context, reaction: &Reaction) {
    let mut message = match reaction.message(&ctx.http).await {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Failed to fetch event message {}: {}", reaction.message_id, e);
            return;
        }
    };

    let title = message
        .embeds
        .first()
        .and_then(|embed| embed.title.clone())
        .unwrap_or_default();

    let roster = roster::collect_roster(&ctx.http, &message).await;
    let embed = build_event_embed(&title, &roster.participants, &roster.spectators);

    if let Err(e) = message.edit(&ctx.http, EditMessage::new().embed(embed)).await {
        tracing::warn!("Failed to update event message {}: {}", message.id, e);
    }
}
