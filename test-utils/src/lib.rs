//! Eventboard Test Utils
//!
//! Shared testing utilities for the event bot. The crate provides factories
//! for Serenity model objects so unit tests can exercise role resolution,
//! permission checks, and roster formatting against fabricated guild data
//! without a gateway connection.

pub mod serenity;
