use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{KlinikaError, Result};
use crate::types::{default_menu, Contacts, NavItem};

/// Top-level configuration for the Klinika shell.
///
/// Loaded from `~/.klinika/config.toml` by default. Each section corresponds
/// to one component or cross-cutting concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KlinikaConfig {
    pub general: GeneralConfig,
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub chat: ChatConfig,
    pub alerts: AlertConfig,
    /// Contact details used until the live contacts fetch resolves.
    pub contacts: Contacts,
    /// Navigation menu entries; falls back to the built-in menu when empty.
    pub menu: Vec<NavItem>,
}

impl Default for KlinikaConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            api: ApiConfig::default(),
            search: SearchConfig::default(),
            chat: ChatConfig::default(),
            alerts: AlertConfig::default(),
            contacts: Contacts::default(),
            menu: default_menu(),
        }
    }
}

impl KlinikaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: KlinikaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| KlinikaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Remote endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the site backend.
    pub base_url: String,
    /// Site search endpoint path.
    pub search_path: String,
    /// Assistant chat endpoint path.
    pub chat_path: String,
    /// Registration endpoint path.
    pub register_path: String,
    /// Credential sign-in endpoint path.
    pub signin_path: String,
    /// Contacts endpoint path.
    pub contacts_path: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            search_path: "/api/search".to_string(),
            chat_path: "/api/chat".to_string(),
            register_path: "/api/auth/register".to_string(),
            signin_path: "/api/auth/signin".to_string(),
            contacts_path: "/api/contacts".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Search overlay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum trimmed query length (in characters) before a search runs.
    pub min_query_chars: usize,
    /// Quiet period after the last keystroke before a request is issued.
    pub debounce_ms: u64,
    /// Description truncation limit (in characters) applied before highlighting.
    pub description_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 3,
            debounce_ms: 300,
            description_limit: 150,
        }
    }
}

/// Chat widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Maximum input length in characters; longer input is ignored.
    pub max_input_chars: usize,
    /// Assistant greeting shown when the widget first opens. Empty disables it.
    pub greeting: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 2000,
            greeting: "Здравствуйте! Помогу подобрать услугу или специалиста клиники."
                .to_string(),
        }
    }
}

/// Toast alert configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// How long an alert stays visible before it expires.
    pub ttl_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self { ttl_ms: 5000 }
    }
}
