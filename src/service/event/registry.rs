use serenity::all::MessageId;

/// In-memory registry of the current event message.
///
/// Single-active-slot policy: registering a new event replaces the previous
/// one, so only the most recently created event message routes reactions.
/// State lives for the process lifetime only; a restart forgets the event
/// while the message itself stays visible in the channel.
#[derive(Debug, Default)]
pub struct EventRegistry {
    active: Option<MessageId>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a freshly posted event message, replacing any previous one.
    pub fn register(&mut self, message_id: MessageId) {
        self.active = Some(message_id);
    }

    /// Whether a message is the current event message.
    pub fn is_event(&self, message_id: MessageId) -> bool {
        self.active == Some(message_id)
    }
}
