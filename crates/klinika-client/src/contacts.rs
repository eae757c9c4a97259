//! Contacts endpoint client with hardcoded fallback.

use klinika_core::config::ApiConfig;
use klinika_core::error::KlinikaError;
use klinika_core::types::Contacts;

use crate::join_url;

/// `GET /api/contacts` client.
#[derive(Clone)]
pub struct ContactsClient {
    http: reqwest::Client,
    url: String,
}

impl ContactsClient {
    pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            url: join_url(&config.base_url, &config.contacts_path),
        }
    }

    /// Fetch live contact details.
    pub async fn fetch(&self) -> Result<Contacts, KlinikaError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| KlinikaError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(KlinikaError::Http(format!("HTTP {}", status.as_u16())));
        }

        response
            .json::<Contacts>()
            .await
            .map_err(|e| KlinikaError::Serialization(e.to_string()))
    }

    /// Fetch live contact details, falling back to the hardcoded defaults
    /// when the request fails for any reason.
    pub async fn fetch_or_default(&self, fallback: &Contacts) -> Contacts {
        match self.fetch().await {
            Ok(contacts) => contacts,
            Err(e) => {
                tracing::warn!(error = %e, "Contacts fetch failed, using fallback values");
                fallback.clone()
            }
        }
    }
}
