//! Icon name mapping.
//!
//! Menu and contact entries reference icons by name in config JSON; the
//! mapping to a concrete icon is an explicit enumeration rather than a
//! dynamic lookup.

use std::fmt;

/// Icons the shell can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Phone,
    Mail,
    MapPin,
    Search,
    Chat,
    Menu,
    Close,
    User,
    Calendar,
    Tooth,
}

impl IconKind {
    /// Resolve a config-supplied icon name. Unknown names resolve to `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "phone" => Some(IconKind::Phone),
            "mail" => Some(IconKind::Mail),
            "map-pin" => Some(IconKind::MapPin),
            "search" => Some(IconKind::Search),
            "chat" => Some(IconKind::Chat),
            "menu" => Some(IconKind::Menu),
            "close" => Some(IconKind::Close),
            "user" => Some(IconKind::User),
            "calendar" => Some(IconKind::Calendar),
            "tooth" => Some(IconKind::Tooth),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Phone => "phone",
            IconKind::Mail => "mail",
            IconKind::MapPin => "map-pin",
            IconKind::Search => "search",
            IconKind::Chat => "chat",
            IconKind::Menu => "menu",
            IconKind::Close => "close",
            IconKind::User => "user",
            IconKind::Calendar => "calendar",
            IconKind::Tooth => "tooth",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_round_trip() {
        let all = [
            IconKind::Phone,
            IconKind::Mail,
            IconKind::MapPin,
            IconKind::Search,
            IconKind::Chat,
            IconKind::Menu,
            IconKind::Close,
            IconKind::User,
            IconKind::Calendar,
            IconKind::Tooth,
        ];
        for icon in all {
            assert_eq!(IconKind::from_name(icon.name()), Some(icon));
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(IconKind::from_name("sparkles"), None);
        assert_eq!(IconKind::from_name(""), None);
    }

    #[test]
    fn test_name_is_case_sensitive() {
        assert_eq!(IconKind::from_name("Phone"), None);
    }
}
