//! Per-session UI state.
//!
//! One explicit state object owned by the application shell, passed to
//! whatever needs it. Holds the burger menu flag, the active overlay, the
//! auth modal, and the toast alert queue. Overlays and the menu are
//! mutually exclusive: opening one closes the rest.

use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::alerts::{AlertLevel, AlertQueue};

/// Which full-screen overlay is currently open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveOverlay {
    #[default]
    None,
    Search,
    Chat,
    Cards,
}

/// Which auth modal is currently open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthModal {
    #[default]
    None,
    SignIn,
    Register,
}

/// Session-scoped UI state for the shell.
pub struct UiSessionState {
    menu_open: bool,
    overlay: ActiveOverlay,
    modal: AuthModal,
    pub alerts: AlertQueue,
}

impl UiSessionState {
    /// Create idle session state with the given alert TTL.
    pub fn new(alert_ttl: Duration) -> Self {
        Self {
            menu_open: false,
            overlay: ActiveOverlay::None,
            modal: AuthModal::None,
            alerts: AlertQueue::new(alert_ttl),
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Toggle the burger menu. Opening it dismisses overlays and modals.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.overlay = ActiveOverlay::None;
            self.modal = AuthModal::None;
        }
    }

    pub fn overlay(&self) -> ActiveOverlay {
        self.overlay
    }

    /// Open `overlay`, closing the menu and any auth modal.
    pub fn open_overlay(&mut self, overlay: ActiveOverlay) {
        self.overlay = overlay;
        self.menu_open = false;
        self.modal = AuthModal::None;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = ActiveOverlay::None;
    }

    pub fn modal(&self) -> AuthModal {
        self.modal
    }

    /// Open an auth modal, closing the menu and any overlay.
    pub fn open_modal(&mut self, modal: AuthModal) {
        self.modal = modal;
        self.menu_open = false;
        self.overlay = ActiveOverlay::None;
    }

    pub fn close_modal(&mut self) {
        self.modal = AuthModal::None;
    }

    /// Enqueue a toast alert.
    pub fn notify(&mut self, level: AlertLevel, text: impl Into<String>, now: Instant) -> Uuid {
        self.alerts.enqueue(level, text, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> UiSessionState {
        UiSessionState::new(Duration::from_secs(5))
    }

    #[test]
    fn test_starts_idle() {
        let s = session();
        assert!(!s.menu_open());
        assert_eq!(s.overlay(), ActiveOverlay::None);
        assert_eq!(s.modal(), AuthModal::None);
        assert!(s.alerts.is_empty());
    }

    #[test]
    fn test_toggle_menu() {
        let mut s = session();
        s.toggle_menu();
        assert!(s.menu_open());
        s.toggle_menu();
        assert!(!s.menu_open());
    }

    #[test]
    fn test_opening_overlay_closes_menu_and_modal() {
        let mut s = session();
        s.toggle_menu();
        s.open_modal(AuthModal::SignIn);
        s.open_overlay(ActiveOverlay::Search);

        assert_eq!(s.overlay(), ActiveOverlay::Search);
        assert!(!s.menu_open());
        assert_eq!(s.modal(), AuthModal::None);
    }

    #[test]
    fn test_opening_menu_closes_overlay() {
        let mut s = session();
        s.open_overlay(ActiveOverlay::Chat);
        s.toggle_menu();
        assert!(s.menu_open());
        assert_eq!(s.overlay(), ActiveOverlay::None);
    }

    #[test]
    fn test_opening_modal_closes_overlay() {
        let mut s = session();
        s.open_overlay(ActiveOverlay::Search);
        s.open_modal(AuthModal::Register);
        assert_eq!(s.modal(), AuthModal::Register);
        assert_eq!(s.overlay(), ActiveOverlay::None);
    }

    #[test]
    fn test_close_overlay_only_affects_overlay() {
        let mut s = session();
        s.open_overlay(ActiveOverlay::Cards);
        s.close_overlay();
        assert_eq!(s.overlay(), ActiveOverlay::None);
    }

    #[test]
    fn test_notify_enqueues_alert() {
        let mut s = session();
        let id = s.notify(AlertLevel::Error, "Ошибка регистрации", Instant::now());
        assert_eq!(s.alerts.len(), 1);
        assert!(s.alerts.dismiss(id));
    }
}
