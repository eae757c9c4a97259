//! HTTP clients for the Klinika site backend.
//!
//! Implements the search and chat backend seams over `reqwest`, plus the
//! auth and contacts endpoints. One shared `reqwest::Client` is built by
//! the shell and cloned into each endpoint client.

pub mod auth;
pub mod chat;
pub mod contacts;
pub mod search;

pub use auth::{AuthClient, AuthError, CredentialProvider};
pub use chat::ChatClient;
pub use contacts::ContactsClient;
pub use search::SearchClient;

/// Join a base URL and an endpoint path without doubling slashes.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
