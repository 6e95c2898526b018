//! Lookups over guild role data fetched from Discord.

pub mod member;
pub mod role;
