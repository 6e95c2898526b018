//! Shared bot state passed to every event handler.
//!
//! The state is constructed once at startup and handed to the gateway event
//! handler. It owns the two pieces of mutable process state — the resolved
//! role bindings and the event registry — behind `RwLock`s, since serenity
//! invokes handlers through `&self`. Everything else is immutable
//! configuration.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::model::event::RoleBindings;
use crate::service::event::registry::EventRegistry;

/// Shared state for the bot's event handlers.
///
/// All fields are cheap to clone: the config is reference-counted and the
/// mutable parts are shared behind `Arc<RwLock<_>>`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from the environment.
    pub config: Arc<Config>,

    /// Emoji-to-role bindings, resolved on ready and on each event creation.
    ///
    /// Empty until the first resolution completes; reactions arriving before
    /// then fail the binding guard and are ignored.
    pub bindings: Arc<RwLock<RoleBindings>>,

    /// Registry of the current event message.
    pub registry: Arc<RwLock<EventRegistry>>,
}

impl AppState {
    /// Creates the state with empty bindings and an empty registry.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            bindings: Arc::new(RwLock::new(RoleBindings::default())),
            registry: Arc::new(RwLock::new(EventRegistry::new())),
        }
    }
}
