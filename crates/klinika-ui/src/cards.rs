//! Recommendation card panel.
//!
//! Renders the cards a chat turn produced in a dismissible overlay and
//! resolves a selection into a navigation target. Purely a presentation
//! and dispatch step: no retry, no caching.

use klinika_core::types::Card;

/// Fixed per-kind layout, dispatched on the card discriminant.
#[derive(Debug, Clone, PartialEq)]
pub enum CardLayout<'a> {
    Specialist {
        name: &'a str,
        qualification: &'a str,
        specialization: &'a str,
        experience: Option<&'a str>,
    },
    Service {
        title: &'a str,
        category: &'a str,
        price: Option<&'a str>,
    },
}

/// Navigation produced by selecting a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
}

/// Dismissible overlay holding the most recent set of cards.
#[derive(Debug, Default)]
pub struct CardPanel {
    cards: Vec<Card>,
    open: bool,
}

impl CardPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `cards`. An empty list renders nothing: the panel stays closed.
    pub fn present(&mut self, cards: Vec<Card>) {
        if cards.is_empty() {
            return;
        }
        self.cards = cards;
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Layouts for the presented cards, in order. Empty while closed.
    pub fn layouts(&self) -> Vec<CardLayout<'_>> {
        if !self.open {
            return Vec::new();
        }
        self.cards
            .iter()
            .map(|card| match card {
                Card::Specialist(c) => CardLayout::Specialist {
                    name: &c.name,
                    qualification: &c.qualification,
                    specialization: &c.specialization,
                    experience: c.experience.as_deref(),
                },
                Card::Service(c) => CardLayout::Service {
                    title: &c.title,
                    category: &c.category,
                    price: c.price.as_deref(),
                },
            })
            .collect()
    }

    /// Select the `index`-th card: close the panel, then navigate to the
    /// card's destination page.
    pub fn select(&mut self, index: usize) -> Option<Navigation> {
        let path = self.cards.get(index).map(Card::route_path)?;
        self.dismiss();
        Some(Navigation { path })
    }

    /// Close the panel, dropping the presented cards.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klinika_core::types::{ServiceCard, SpecialistCard};

    fn service_card() -> Card {
        Card::Service(ServiceCard {
            id: "42".to_string(),
            title: "Лечение кариеса".to_string(),
            category: "Стоматология".to_string(),
            description: None,
            price: Some("от 2 900 ₽".to_string()),
            category_slug: "dentistry".to_string(),
        })
    }

    fn specialist_card() -> Card {
        Card::Specialist(SpecialistCard {
            id: "77".to_string(),
            name: "Иванова Анна Петровна".to_string(),
            qualification: "Врач высшей категории".to_string(),
            specialization: "Стоматолог-терапевт".to_string(),
            experience: Some("12 лет".to_string()),
            education: None,
            image_url: None,
            category_slug: "dentistry".to_string(),
        })
    }

    #[test]
    fn test_empty_cards_render_nothing() {
        let mut panel = CardPanel::new();
        panel.present(vec![]);
        assert!(!panel.is_open());
        assert!(panel.layouts().is_empty());
    }

    #[test]
    fn test_present_opens_with_cards_in_order() {
        let mut panel = CardPanel::new();
        panel.present(vec![service_card(), specialist_card()]);
        assert!(panel.is_open());
        assert_eq!(panel.cards().len(), 2);
        assert_eq!(panel.cards()[0], service_card());
    }

    #[test]
    fn test_layouts_match_discriminants() {
        let mut panel = CardPanel::new();
        panel.present(vec![service_card(), specialist_card()]);

        let layouts = panel.layouts();
        assert_eq!(layouts.len(), 2);
        match &layouts[0] {
            CardLayout::Service { title, category, price } => {
                assert_eq!(*title, "Лечение кариеса");
                assert_eq!(*category, "Стоматология");
                assert_eq!(*price, Some("от 2 900 ₽"));
            }
            other => panic!("Expected service layout, got {:?}", other),
        }
        match &layouts[1] {
            CardLayout::Specialist { name, experience, .. } => {
                assert_eq!(*name, "Иванова Анна Петровна");
                assert_eq!(*experience, Some("12 лет"));
            }
            other => panic!("Expected specialist layout, got {:?}", other),
        }
    }

    #[test]
    fn test_select_navigates_and_closes() {
        let mut panel = CardPanel::new();
        panel.present(vec![service_card(), specialist_card()]);

        let nav = panel.select(0).unwrap();
        assert_eq!(nav.path, "/services/dentistry/42");
        assert!(!panel.is_open());
        assert!(panel.cards().is_empty());
    }

    #[test]
    fn test_select_specialist_path() {
        let mut panel = CardPanel::new();
        panel.present(vec![specialist_card()]);
        let nav = panel.select(0).unwrap();
        assert_eq!(nav.path, "/doctors/dentistry/77");
    }

    #[test]
    fn test_select_out_of_range_keeps_panel() {
        let mut panel = CardPanel::new();
        panel.present(vec![service_card()]);
        assert!(panel.select(3).is_none());
        assert!(panel.is_open());
    }

    #[test]
    fn test_dismiss_clears_cards() {
        let mut panel = CardPanel::new();
        panel.present(vec![service_card()]);
        panel.dismiss();
        assert!(!panel.is_open());
        assert!(panel.layouts().is_empty());
    }

    #[test]
    fn test_present_replaces_previous_cards() {
        let mut panel = CardPanel::new();
        panel.present(vec![service_card(), specialist_card()]);
        panel.present(vec![specialist_card()]);
        assert_eq!(panel.cards().len(), 1);
    }
}
