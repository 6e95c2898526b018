//! Domain types for event announcements.
//!
//! An event is a single bot-posted message members interact with through a
//! closed set of reactions. These types carry no Discord connection state;
//! everything here is plain data the handlers and services pass around.

use serenity::all::RoleId;

/// A reaction option offered on an event message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChoice {
    Join,
    Spectate,
    Cancel,
}

impl ReactionChoice {
    /// The order in which reactions are seeded onto a fresh event message.
    pub const ALL: [ReactionChoice; 3] = [Self::Join, Self::Spectate, Self::Cancel];

    /// The unicode emoji presented for this choice.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Join => "✋",
            Self::Spectate => "👀",
            Self::Cancel => "❌",
        }
    }

    /// Maps a raw unicode reaction back to a choice.
    ///
    /// # Returns
    /// - `Some(choice)` - The emoji is one of the three event options
    /// - `None` - Any other emoji; callers treat the reaction as unbound
    pub fn from_unicode(emoji: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.emoji() == emoji)
    }
}

/// Resolved emoji-to-role bindings for the configured guild.
///
/// A configured role name that does not resolve in the guild stays `None`,
/// and the corresponding reaction is inert. Cancel carries no binding of its
/// own; it revokes whichever bound roles the member currently holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleBindings {
    pub join: Option<RoleId>,
    pub spectate: Option<RoleId>,
}

impl RoleBindings {
    /// The role granted for a choice, if its binding resolved.
    pub fn role_for(&self, choice: ReactionChoice) -> Option<RoleId> {
        match choice {
            ReactionChoice::Join => self.join,
            ReactionChoice::Spectate => self.spectate,
            ReactionChoice::Cancel => None,
        }
    }

    /// The mutually exclusive counterpart of a join/spectate choice.
    ///
    /// # Returns
    /// - `Some(role_id)` - The role to revoke before granting the target
    /// - `None` - Cancel, or the counterpart binding did not resolve
    pub fn exclusive_counterpart(&self, choice: ReactionChoice) -> Option<RoleId> {
        match choice {
            ReactionChoice::Join => self.spectate,
            ReactionChoice::Spectate => self.join,
            ReactionChoice::Cancel => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests mapping each event emoji back to its choice.
    ///
    /// Expected: Some(choice) for the three event emoji, None otherwise
    #[test]
    fn maps_unicode_to_choice() {
        assert_eq!(ReactionChoice::from_unicode("✋"), Some(ReactionChoice::Join));
        assert_eq!(ReactionChoice::from_unicode("👀"), Some(ReactionChoice::Spectate));
        assert_eq!(ReactionChoice::from_unicode("❌"), Some(ReactionChoice::Cancel));
        assert_eq!(ReactionChoice::from_unicode("🎉"), None);
    }

    /// Tests the fixed seeding order of reaction options.
    ///
    /// Expected: join, spectate, cancel
    #[test]
    fn seeds_reactions_in_fixed_order() {
        let emoji: Vec<&str> = ReactionChoice::ALL.into_iter().map(ReactionChoice::emoji).collect();
        assert_eq!(emoji, vec!["✋", "👀", "❌"]);
    }

    /// Tests role lookup per choice on resolved bindings.
    ///
    /// Expected: join/spectate map to their roles, cancel maps to None
    #[test]
    fn returns_bound_role_per_choice() {
        let bindings = RoleBindings {
            join: Some(RoleId::new(111)),
            spectate: Some(RoleId::new(222)),
        };

        assert_eq!(bindings.role_for(ReactionChoice::Join), Some(RoleId::new(111)));
        assert_eq!(bindings.role_for(ReactionChoice::Spectate), Some(RoleId::new(222)));
        assert_eq!(bindings.role_for(ReactionChoice::Cancel), None);
    }

    /// Tests the exclusivity counterpart lookup.
    ///
    /// Expected: join pairs with spectate and vice versa; cancel has none
    #[test]
    fn pairs_mutually_exclusive_roles() {
        let bindings = RoleBindings {
            join: Some(RoleId::new(111)),
            spectate: Some(RoleId::new(222)),
        };

        assert_eq!(
            bindings.exclusive_counterpart(ReactionChoice::Join),
            Some(RoleId::new(222))
        );
        assert_eq!(
            bindings.exclusive_counterpart(ReactionChoice::Spectate),
            Some(RoleId::new(111))
        );
        assert_eq!(bindings.exclusive_counterpart(ReactionChoice::Cancel), None);
    }

    /// Tests that unresolved bindings stay inert.
    ///
    /// Expected: None for every choice on default bindings
    #[test]
    fn default_bindings_are_inert() {
        let bindings = RoleBindings::default();

        assert_eq!(bindings.role_for(ReactionChoice::Join), None);
        assert_eq!(bindings.role_for(ReactionChoice::Spectate), None);
        assert_eq!(bindings.exclusive_counterpart(ReactionChoice::Join), None);
    }
}
