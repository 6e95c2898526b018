//! Test factories for creating Serenity API objects.
//!
//! Serenity's model structs cannot be constructed directly, so these
//! factories build them by deserializing JSON shaped like the payloads
//! Discord's API would return. Only the fields the tests care about are
//! parameters; everything else gets a sensible default.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_role, create_test_user};
//!
//! let role = create_test_role(111, "Raider");
//! let user = create_test_user(100, "alice", false);
//! ```

pub mod role;
pub mod user;

// Re-export commonly used functions for convenience
pub use role::create_test_role;
pub use user::create_test_user;
