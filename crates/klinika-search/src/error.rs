//! Error types for the search overlay.

/// Errors from the search backend.
///
/// The overlay never propagates these to its caller; they are logged and
/// degraded to an empty result set.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search transport error: {0}")]
    Transport(String),
    #[error("search endpoint returned status {0}")]
    Status(u16),
    #[error("search response could not be decoded: {0}")]
    Decode(String),
}
