//! Chat backend seam.

use async_trait::async_trait;

use klinika_core::types::{Card, ChatMessage};

use crate::error::ChatError;

/// One assistant reply: the message text plus any recommendation cards.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantTurn {
    pub message: String,
    pub cards: Vec<Card>,
}

/// Remote assistant, abstracted so the widget can be driven in tests
/// without a network.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send the full transcript (newest message last) and return the
    /// assistant's reply.
    async fn complete(&self, transcript: &[ChatMessage]) -> Result<AssistantTurn, ChatError>;
}
