use serenity::all::{Role, RoleId};

/// Returns true iff the member holds a role with the exact display name.
///
/// Takes the member's role IDs and the guild role list separately, since
/// Discord members only carry IDs; the names live on the guild.
///
/// # Arguments
/// - `member_roles` - Role IDs held by the member
/// - `guild_roles` - The guild's role list
/// - `name` - Required role display name
pub fn member_has_named_role(member_roles: &[RoleId], guild_roles: &[Role], name: &str) -> bool {
    member_roles.iter().any(|role_id| {
        guild_roles
            .iter()
            .any(|role| role.id == *role_id && role.name == name)
    })
}
