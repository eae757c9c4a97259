//! Conversational assistant widget for Klinika.
//!
//! Maintains the append-only chat transcript, posts full transcripts to the
//! remote assistant on each turn, and surfaces structured recommendation
//! cards from responses.

pub mod backend;
pub mod error;
pub mod transcript;
pub mod widget;

pub use backend::{AssistantTurn, ChatBackend};
pub use error::ChatError;
pub use transcript::Transcript;
pub use widget::{ChatWidget, SendOutcome};
