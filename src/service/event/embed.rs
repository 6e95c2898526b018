//! Event embed rendering.
//!
//! Builds the display embed shown on an event message. The renderer is a pure
//! function of its inputs: the embed carries no timestamps or other varying
//! parts, so the roster can be re-rendered on every reaction and identical
//! inputs always produce identical output.

use serenity::all::CreateEmbed;

/// Placeholder shown while a roster line has no members.
const EMPTY_LIST_PLACEHOLDER: &str = "No one yet";

/// Static instruction line shown under the event title.
const INSTRUCTION: &str = "React to join or spectate!";

/// Builds the display embed for an event message.
///
/// # Arguments
/// - `title` - Event title
/// - `participants` - Mention strings of members who joined
/// - `spectators` - Mention strings of members who spectate
///
/// # Returns
/// - `CreateEmbed` - Title, instruction line, and one field per roster list
pub fn build_event_embed(
    title: &str,
    participants: &[String],
    spectators: &[String],
) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(INSTRUCTION)
        .field("Participants", roster_line(participants), false)
        .field("Spectators", roster_line(spectators), false)
}

fn roster_line(mentions: &[String]) -> String {
    if mentions.is_empty() {
        EMPTY_LIST_PLACEHOLDER.to_string()
    } else {
        mentions.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the embed for a freshly created event.
    ///
    /// Expected: title, instruction description, and placeholder roster lines
    #[test]
    fn renders_empty_event() {
        let embed = build_event_embed("Friday Raid", &[], &[]);
        let value = serde_json::to_value(&embed).unwrap();

        assert_eq!(value["title"], "Friday Raid");
        assert_eq!(value["description"], "React to join or spectate!");
        assert_eq!(value["fields"][0]["name"], "Participants");
        assert_eq!(value["fields"][0]["value"], "No one yet");
        assert_eq!(value["fields"][1]["name"], "Spectators");
        assert_eq!(value["fields"][1]["value"], "No one yet");
    }

    /// Tests the embed with populated roster lists.
    ///
    /// Expected: comma-separated mention lines in list order
    #[test]
    fn renders_roster_mentions() {
        let participants = vec!["<@100>".to_string(), "<@200>".to_string()];
        let spectators = vec!["<@300>".to_string()];

        let embed = build_event_embed("Friday Raid", &participants, &spectators);
        let value = serde_json::to_value(&embed).unwrap();

        assert_eq!(value["fields"][0]["value"], "<@100>, <@200>");
        assert_eq!(value["fields"][1]["value"], "<@300>");
    }

    /// Tests render idempotence.
    ///
    /// Expected: two renders of identical inputs serialize identically
    #[test]
    fn renders_identically_for_identical_inputs() {
        let participants = vec!["<@100>".to_string()];
        let spectators: Vec<String> = Vec::new();

        let first = build_event_embed("Friday Raid", &participants, &spectators);
        let second = build_event_embed("Friday Raid", &participants, &spectators);

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
