//! Roster collection for event messages.
//!
//! The roster is derived by scanning the event message's current reactions:
//! every non-bot user reacting with the join emoji is a participant, every
//! non-bot user reacting with the spectate emoji is a spectator. The scan
//! runs before the triggering reaction is retracted, so the reacting member
//! is included in the lists being rendered.

use serenity::all::{Message, ReactionType, User, UserId};
use serenity::http::Http;

use crate::model::event::ReactionChoice;

/// Participant and spectator mention lists for an event message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRoster {
    pub participants: Vec<String>,
    pub spectators: Vec<String>,
}

/// Formats the non-bot users among `users` as mention strings.
pub fn non_bot_mentions(users: &[User]) -> Vec<String> {
    users
        .iter()
        .filter(|user| !user.bot)
        .map(|user| format!("<@{}>", user.id))
        .collect()
}

/// Collects the current roster by scanning the message's reactions.
///
/// Fetches the reactors for the join and spectate emoji and keeps the non-bot
/// users. A failed fetch for one emoji leaves that list empty rather than
/// failing the whole roster.
pub async fn collect_roster(http: &Http, message: &Message) -> EventRoster {
    EventRoster {
        participants: reactors(http, message, ReactionChoice::Join).await,
        spectators: reactors(http, message, ReactionChoice::Spectate).await,
    }
}

async fn reactors(http: &Http, message: &Message, choice: ReactionChoice) -> Vec<String> {
    let emoji = ReactionType::Unicode(choice.emoji().to_string());

    match message.reaction_users(http, emoji, None, None::<UserId>).await {
        Ok(users) => non_bot_mentions(&users),
        Err(e) => {
            tracing::warn!(
                "Failed to fetch {} reactors for message {}: {}",
                choice.emoji(),
                message.id,
                e
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_user;

    /// Tests mention formatting for human reactors.
    ///
    /// Expected: one `<@id>` mention per user, in input order
    #[test]
    fn formats_mentions_in_order() {
        let users = vec![
            create_test_user(100, "alice", false),
            create_test_user(200, "bob", false),
        ];

        assert_eq!(non_bot_mentions(&users), vec!["<@100>", "<@200>"]);
    }

    /// Tests that bot reactors are excluded from the roster.
    ///
    /// Expected: only non-bot users remain
    #[test]
    fn filters_bot_reactors() {
        let users = vec![
            create_test_user(1, "eventboard", true),
            create_test_user(100, "alice", false),
        ];

        assert_eq!(non_bot_mentions(&users), vec!["<@100>"]);
    }

    /// Tests the empty reactor list.
    ///
    /// Expected: an empty mention list
    #[test]
    fn handles_no_reactors() {
        assert!(non_bot_mentions(&[]).is_empty());
    }
}
