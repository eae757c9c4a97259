use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Kind of site content a search result points at.
///
/// Serialized in kebab-case to match the site API (`patient-info` etc.).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultKind {
    Service,
    Specialist,
    Vacancy,
    Faq,
    Material,
    Partner,
    Contact,
    PatientInfo,
}

impl ResultKind {
    /// Localized group heading shown above results of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            ResultKind::Service => "Услуги",
            ResultKind::Specialist => "Специалисты",
            ResultKind::Vacancy => "Вакансии",
            ResultKind::Faq => "Вопросы и ответы",
            ResultKind::Material => "Полезные материалы",
            ResultKind::Partner => "Партнёры",
            ResultKind::Contact => "Контакты",
            ResultKind::PatientInfo => "Пациентам",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultKind::Service => write!(f, "service"),
            ResultKind::Specialist => write!(f, "specialist"),
            ResultKind::Vacancy => write!(f, "vacancy"),
            ResultKind::Faq => write!(f, "faq"),
            ResultKind::Material => write!(f, "material"),
            ResultKind::Partner => write!(f, "partner"),
            ResultKind::Contact => write!(f, "contact"),
            ResultKind::PatientInfo => write!(f, "patient-info"),
        }
    }
}

impl std::str::FromStr for ResultKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" => Ok(ResultKind::Service),
            "specialist" => Ok(ResultKind::Specialist),
            "vacancy" => Ok(ResultKind::Vacancy),
            "faq" => Ok(ResultKind::Faq),
            "material" => Ok(ResultKind::Material),
            "partner" => Ok(ResultKind::Partner),
            "contact" => Ok(ResultKind::Contact),
            "patient-info" => Ok(ResultKind::PatientInfo),
            _ => Err(format!("Unknown result kind: {}", s)),
        }
    }
}

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

// =============================================================================
// Search
// =============================================================================

/// A single entry returned by the site search endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub url: String,
}

// =============================================================================
// Chat
// =============================================================================

/// One entry in the chat transcript.
///
/// The wire shape is `{ role, content, cards? }`; the id and timestamp are
/// local bookkeeping and never serialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(skip, default = "Utc::now")]
    pub sent_at: DateTime<Utc>,
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Card>,
}

impl ChatMessage {
    /// Build a user-authored message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sent_at: Utc::now(),
            role: Role::User,
            content: content.into(),
            cards: Vec::new(),
        }
    }

    /// Build an assistant message, optionally carrying recommendation cards.
    pub fn assistant(content: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sent_at: Utc::now(),
            role: Role::Assistant,
            content: content.into(),
            cards,
        }
    }
}

// =============================================================================
// Cards
// =============================================================================

/// Structured recommendation returned by the chat backend.
///
/// Discriminated on the wire by a `type` field carried alongside the payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Card {
    Specialist(SpecialistCard),
    Service(ServiceCard),
}

impl Card {
    pub fn id(&self) -> &str {
        match self {
            Card::Specialist(c) => &c.id,
            Card::Service(c) => &c.id,
        }
    }

    pub fn category_slug(&self) -> &str {
        match self {
            Card::Specialist(c) => &c.category_slug,
            Card::Service(c) => &c.category_slug,
        }
    }

    /// Destination page for this card.
    ///
    /// Specialists resolve to `/doctors/{categorySlug}/{id}`, services to
    /// `/services/{categorySlug}/{id}`.
    pub fn route_path(&self) -> String {
        match self {
            Card::Specialist(c) => format!("/doctors/{}/{}", c.category_slug, c.id),
            Card::Service(c) => format!("/services/{}/{}", c.category_slug, c.id),
        }
    }
}

/// Card describing a clinic specialist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecialistCard {
    pub id: String,
    pub name: String,
    pub qualification: String,
    pub specialization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "categorySlug")]
    pub category_slug: String,
}

/// Card describing a clinic service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(rename = "categorySlug")]
    pub category_slug: String,
}

// =============================================================================
// Static site data
// =============================================================================

/// Clinic contact details shown in the header and footer.
///
/// The `Default` values are the hardcoded fallbacks used until (or if) the
/// live contacts fetch resolves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Default for Contacts {
    fn default() -> Self {
        Self {
            phone: "+7 (495) 120-30-03".to_string(),
            email: "info@klinika.ru".to_string(),
            address: "г. Москва, ул. Лесная, д. 5".to_string(),
        }
    }
}

/// One navigation menu entry, possibly with a submenu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            children: Vec::new(),
        }
    }
}

/// Hardcoded fallback menu used when no menu is configured.
pub fn default_menu() -> Vec<NavItem> {
    vec![
        NavItem::new("Услуги", "/services"),
        NavItem::new("Специалисты", "/doctors"),
        NavItem::new("Пациентам", "/patient-info"),
        NavItem::new("О клинике", "/about"),
        NavItem::new("Контакты", "/contacts"),
    ]
}

// =============================================================================
// Auth
// =============================================================================

/// Credentials consumed by the sign-in provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// Registrant fields sent to the registration endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

// =============================================================================
// Tests
// =============================================================================
