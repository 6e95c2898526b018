//! Error types for the bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. Only
//! configuration problems are fatal; everything the bot hits at runtime is
//! logged and swallowed by the handler that encountered it, per the design
//! that a single failed Discord call must never take the process down.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application.
/// Most variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal: the bot refuses to start with an incomplete environment.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal error indicating unexpected behavior & possible bugs.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Surfaces from client construction and the
    /// gateway connection; per-event Discord failures are handled locally.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
