//! Append-only chat transcript.
//!
//! Messages are only ever appended in request order; nothing mutates or
//! removes an entry short of an explicit reset. Every mutation bumps a
//! revision counter so the view layer knows to scroll to the latest message.

use klinika_core::types::{Card, ChatMessage, Role};

/// Ordered sequence of chat messages for one widget session.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    revision: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatMessage::user(content));
    }

    /// Append an assistant message with optional cards.
    pub fn push_assistant(&mut self, content: impl Into<String>, cards: Vec<Card>) {
        self.push(ChatMessage::assistant(content, cards));
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.revision += 1;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Count of messages with the given role.
    pub fn count_role(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }

    /// Monotonic counter incremented on every mutation; the view scrolls to
    /// the latest message whenever it observes a change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Manual reset: the only operation that removes messages.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let t = Transcript::new();
        assert!(t.is_empty());
        assert_eq!(t.revision(), 0);
    }

    #[test]
    fn test_messages_appended_in_order() {
        let mut t = Transcript::new();
        t.push_user("Привет");
        t.push_assistant("Здравствуйте!", vec![]);
        t.push_user("Подберите врача");

        assert_eq!(t.len(), 3);
        assert_eq!(t.messages()[0].role, Role::User);
        assert_eq!(t.messages()[0].content, "Привет");
        assert_eq!(t.messages()[1].role, Role::Assistant);
        assert_eq!(t.messages()[2].content, "Подберите врача");
    }

    #[test]
    fn test_last_is_newest_message() {
        let mut t = Transcript::new();
        t.push_user("Привет");
        let msg = t.last().unwrap();
        assert_eq!(msg.content, "Привет");
        assert_eq!(msg.role, Role::User);
    }

    #[test]
    fn test_revision_bumps_on_every_mutation() {
        let mut t = Transcript::new();
        t.push_user("а");
        assert_eq!(t.revision(), 1);
        t.push_assistant("б", vec![]);
        assert_eq!(t.revision(), 2);
        t.reset();
        assert_eq!(t.revision(), 3);
    }

    #[test]
    fn test_count_role() {
        let mut t = Transcript::new();
        t.push_user("1");
        t.push_assistant("2", vec![]);
        t.push_user("3");
        assert_eq!(t.count_role(Role::User), 2);
        assert_eq!(t.count_role(Role::Assistant), 1);
    }

    #[test]
    fn test_reset_clears_messages() {
        let mut t = Transcript::new();
        t.push_user("Привет");
        t.reset();
        assert!(t.is_empty());
        assert!(t.last().is_none());
    }
}
