//! Error types for the chat widget.

/// Errors from the chat backend.
///
/// The widget converts every variant into one synthetic assistant message;
/// nothing propagates past the widget boundary.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Server-reported failure: the `error` string from a non-OK response.
    #[error("chat backend error: {0}")]
    Backend(String),
    #[error("chat transport error: {0}")]
    Transport(String),
    #[error("chat response missing required `message` field")]
    MissingMessage,
    #[error("chat response could not be decoded: {0}")]
    Decode(String),
}
