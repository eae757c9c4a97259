//! Presentation-layer state for the Klinika shell.
//!
//! Card panel, toast alert queue, UI session state, icon mapping, phone
//! input formatting, and navigation seams. Everything here is explicit
//! state owned by the application shell; there are no ambient singletons.

pub mod alerts;
pub mod cards;
pub mod icons;
pub mod nav;
pub mod phone;
pub mod session;

pub use alerts::{Alert, AlertLevel, AlertQueue};
pub use cards::{CardLayout, CardPanel, Navigation};
pub use icons::IconKind;
pub use nav::{Navigator, RouteLog};
pub use phone::{format_phone_input, normalize_phone};
pub use session::{ActiveOverlay, AuthModal, UiSessionState};
