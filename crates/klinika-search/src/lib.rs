//! Site search overlay for Klinika.
//!
//! Provides the debounced search-as-you-type state machine, result grouping,
//! and query highlighting behind the header search overlay.

pub mod backend;
pub mod debounce;
pub mod error;
pub mod highlight;
pub mod overlay;

pub use backend::SearchBackend;
pub use debounce::{Debouncer, SettledQuery};
pub use error::SearchError;
pub use highlight::{highlight, truncate_chars, Fragment};
pub use overlay::{OverlayView, ResultGroup, ResultItem, SearchOverlay, SearchRequest, Selection};
