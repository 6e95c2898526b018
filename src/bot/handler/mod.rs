use serenity::all::{Context, EventHandler, Interaction, Reaction, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod interaction;
pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, data: Ready) {
        ready::handle_ready(&self.state, ctx, data).await;
    }

    /// Called when a slash command or other interaction is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }

    /// Called when a reaction is added to a visible message
    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        reaction::handle_reaction_add(&self.state, ctx, reaction).await;
    }
}
