use serenity::all::{Role, RoleId};

use crate::model::event::RoleBindings;

/// Looks up a role ID by its exact display name.
///
/// Pure lookup over a guild role list, typically the result of a
/// `get_guild_roles` call. Names are matched exactly, including case.
///
/// # Arguments
/// - `roles` - The guild's role list
/// - `name` - Target display name
///
/// # Returns
/// - `Some(role_id)` - A role with that exact name exists
/// - `None` - No role carries the name; never an error
pub fn find_role_id_by_name(roles: &[Role], name: &str) -> Option<RoleId> {
    roles.iter().find(|role| role.name == name).map(|role| role.id)
}

/// Resolves the join/spectate role bindings from a guild role list.
///
/// Called on ready and again on every event creation so role renames between
/// events are picked up. A name that does not resolve leaves its binding
/// `None`, making the corresponding reaction inert.
pub fn resolve_bindings(roles: &[Role], join_name: &str, spectate_name: &str) -> RoleBindings {
    RoleBindings {
        join: find_role_id_by_name(roles, join_name),
        spectate: find_role_id_by_name(roles, spectate_name),
    }
}
