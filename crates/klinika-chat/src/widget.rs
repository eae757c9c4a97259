//! Chat widget state machine.
//!
//! Lifecycle: Closed -> Open on click, back to Closed on click; while open
//! the widget alternates Idle <-> Sending, guarded by an in-flight flag so
//! overlapping requests are impossible. Each send posts the entire
//! transcript; each failure appends exactly one synthetic assistant message
//! and always clears the in-flight flag.

use klinika_core::config::ChatConfig;
use klinika_core::types::Card;

use crate::backend::ChatBackend;
use crate::error::ChatError;
use crate::transcript::Transcript;

/// Fallback shown when the assistant is not configured on the server.
const FALLBACK_NO_API_KEY: &str =
    "Извините, ассистент сейчас не настроен. Позвоните в клинику — администратор поможет подобрать услугу.";
/// Fallback shown when the server cannot load clinic data.
const FALLBACK_NO_CLINIC_DATA: &str =
    "Извините, данные клиники временно недоступны. Воспользуйтесь поиском по сайту.";
/// Generic fallback for any other failure.
const FALLBACK_GENERIC: &str =
    "Извините, произошла ошибка. Попробуйте ещё раз чуть позже.";

/// Result of a [`ChatWidget::send`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Validation short-circuit: empty input, widget closed, or a send
    /// already in flight. Nothing was appended.
    Ignored,
    /// The assistant replied; `cards` (possibly empty) go to the card panel.
    Replied { cards: Vec<Card> },
    /// The backend failed; a fallback assistant message was appended.
    Failed,
}

/// Turn-based chat widget over a [`ChatBackend`].
pub struct ChatWidget<B> {
    backend: B,
    max_input_chars: usize,
    greeting: String,
    open: bool,
    sending: bool,
    input: String,
    transcript: Transcript,
}

impl<B: ChatBackend> ChatWidget<B> {
    /// Create a closed widget with an empty transcript.
    pub fn new(config: &ChatConfig, backend: B) -> Self {
        Self {
            backend,
            max_input_chars: config.max_input_chars,
            greeting: config.greeting.clone(),
            open: false,
            sending: false,
            input: String::new(),
            transcript: Transcript::new(),
        }
    }

    /// Open the widget. On the very first open an assistant greeting is
    /// appended, if one is configured.
    pub fn open(&mut self) {
        self.open = true;
        if self.transcript.is_empty() && !self.greeting.is_empty() {
            self.transcript.push_assistant(self.greeting.clone(), vec![]);
        }
    }

    /// Close the widget. The transcript stays in memory and is shown again
    /// on the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Manually reset the conversation.
    pub fn reset(&mut self) {
        self.transcript.reset();
        self.input.clear();
    }

    /// Send `text` as the next user turn.
    ///
    /// No-op when the trimmed text is empty, the widget is closed, a send is
    /// already in flight, or the input exceeds the configured maximum.
    /// Otherwise the user message is appended, the input box cleared, and
    /// the full transcript posted to the backend. The in-flight flag is
    /// cleared on every exit path.
    pub async fn send(&mut self, text: &str) -> SendOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() || !self.open || self.sending {
            return SendOutcome::Ignored;
        }
        if trimmed.chars().count() > self.max_input_chars {
            tracing::warn!(
                len = trimmed.chars().count(),
                max = self.max_input_chars,
                "Chat input over limit ignored"
            );
            return SendOutcome::Ignored;
        }

        self.transcript.push_user(trimmed);
        self.input.clear();
        self.sending = true;

        let result = self.backend.complete(self.transcript.messages()).await;

        // Cleared before the result is even inspected, whatever happened.
        self.sending = false;

        match result {
            Ok(turn) => {
                self.transcript
                    .push_assistant(turn.message, turn.cards.clone());
                SendOutcome::Replied { cards: turn.cards }
            }
            Err(error) => {
                tracing::warn!(error = %error, "Chat request failed");
                self.transcript
                    .push_assistant(fallback_text(&error), vec![]);
                SendOutcome::Failed
            }
        }
    }
}

/// Map a backend error to user-facing fallback text by known substrings.
fn fallback_text(error: &ChatError) -> &'static str {
    if let ChatError::Backend(message) = error {
        let lower = message.to_lowercase();
        if lower.contains("api key") || lower.contains("api_key") {
            return FALLBACK_NO_API_KEY;
        }
        if lower.contains("clinic") || lower.contains("клиник") {
            return FALLBACK_NO_CLINIC_DATA;
        }
    }
    FALLBACK_GENERIC
}

// =============================================================================
// Tests
// =============================================================================
