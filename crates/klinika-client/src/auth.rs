//! Registration and credential sign-in clients.

use async_trait::async_trait;
use serde::Deserialize;

use klinika_core::config::ApiConfig;
use klinika_core::types::{Credentials, RegisterRequest};

use crate::join_url;

/// Errors from the auth endpoints.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Server-reported failure; the string is shown to the user verbatim.
    #[error("{0}")]
    Server(String),
    #[error("auth transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Sign-in provider consuming `{ login, password }`.
///
/// The concrete provider is opaque to the shell; [`AuthClient`] implements
/// it against the site backend.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Client for `POST /api/auth/register` and the sign-in endpoint.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    register_url: String,
    signin_url: String,
}

impl AuthClient {
    pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            register_url: join_url(&config.base_url, &config.register_path),
            signin_url: join_url(&config.base_url, &config.signin_path),
        }
    }

    /// Register a new patient account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        let response = self
            .http
            .post(&self.register_url)
            .json(request)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            tracing::info!("Registration succeeded");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(parse_failure(status, &body))
    }
}

#[async_trait]
impl CredentialProvider for AuthClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let response = self
            .http
            .post(&self.signin_url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            tracing::info!(login = %credentials.login, "Sign-in succeeded");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(parse_failure(status, &body))
    }
}

/// Decode a non-OK auth response: the `{ error }` string when present,
/// otherwise a transport error with the status.
fn parse_failure(status: u16, body: &str) -> AuthError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => AuthError::Server(err.error),
        Err(_) => AuthError::Transport(format!("HTTP {}", status)),
    }
}
