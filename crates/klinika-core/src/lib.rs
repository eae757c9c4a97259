pub mod config;
pub mod error;
pub mod types;

pub use config::KlinikaConfig;
pub use error::{KlinikaError, Result};
pub use types::*;
