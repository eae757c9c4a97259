//! Search overlay state machine.
//!
//! Tracks the query box, the debounce window, and the rendered view. The
//! overlay itself never performs I/O: the driver polls it for settled
//! requests, runs them against a [`SearchBackend`](crate::SearchBackend),
//! and feeds responses back in. Responses are tagged with the request
//! sequence number; anything older than the newest issued request is
//! discarded, so a slow early response can never overwrite fresher results.

use std::time::Instant;

use klinika_core::config::SearchConfig;
use klinika_core::types::{ResultKind, SearchResult};

use crate::debounce::Debouncer;
use crate::error::SearchError;
use crate::highlight::{highlight, truncate_chars, Fragment};

/// Kinds offered as shortcuts before the user has typed anything.
const SHORTCUT_KINDS: [ResultKind; 4] = [
    ResultKind::Service,
    ResultKind::Specialist,
    ResultKind::PatientInfo,
    ResultKind::Contact,
];

/// What the overlay currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayView {
    /// No query yet: category shortcuts.
    Shortcuts,
    /// Query shorter than the minimum; "type more" placeholder.
    TooShort,
    /// A request for the current query is in flight.
    Loading,
    /// Grouped, highlighted results.
    Results(Vec<ResultGroup>),
    /// The backend answered with no matches.
    NoMatches,
}

/// Results of one kind, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup {
    pub kind: ResultKind,
    pub label: &'static str,
    pub items: Vec<ResultItem>,
}

/// One rendered result: the raw entry plus highlighted title/description.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    pub result: SearchResult,
    pub title: Vec<Fragment>,
    pub description: Vec<Fragment>,
}

/// A settled query the driver should send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// Navigation produced by selecting a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub url: String,
}

/// State machine behind the header search overlay.
pub struct SearchOverlay {
    min_query_chars: usize,
    description_limit: usize,
    debouncer: Debouncer,
    open: bool,
    query: String,
    view: OverlayView,
    /// Sequence number of the newest request handed to the driver.
    issued: u64,
    /// Sequence number of the newest response applied.
    completed: u64,
}

impl SearchOverlay {
    /// Create an overlay with the given search configuration.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            min_query_chars: config.min_query_chars,
            description_limit: config.description_limit,
            debouncer: Debouncer::new(std::time::Duration::from_millis(config.debounce_ms)),
            open: false,
            query: String::new(),
            view: OverlayView::Shortcuts,
            issued: 0,
            completed: 0,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the overlay without side effects (Escape / backdrop click).
    ///
    /// Per-session search state does not outlive the overlay: the query and
    /// view reset, and any pending debounce window is dropped.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.query.clear();
        self.view = OverlayView::Shortcuts;
        self.debouncer.cancel();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> &OverlayView {
        &self.view
    }

    /// Kinds offered as shortcuts in the no-query state.
    pub fn shortcut_kinds() -> [ResultKind; 4] {
        SHORTCUT_KINDS
    }

    /// Record an input change at `now`.
    ///
    /// Queries under the minimum length clear the result set immediately and
    /// never reach the backend; longer queries (re)start the debounce window.
    pub fn set_query(&mut self, raw: &str, now: Instant) {
        self.query = raw.to_string();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            self.debouncer.cancel();
            self.view = OverlayView::Shortcuts;
        } else if trimmed.chars().count() < self.min_query_chars {
            self.debouncer.cancel();
            self.view = OverlayView::TooShort;
        } else {
            self.debouncer.input(trimmed, now);
        }
    }

    /// Next instant at which [`poll`](Self::poll) may produce a request.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Produce the settled request for the current query, if the debounce
    /// window has elapsed by `now`. At most one request per window.
    pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
        let settled = self.debouncer.settle(now)?;
        self.issued = settled.seq;
        self.view = OverlayView::Loading;
        Some(SearchRequest {
            seq: settled.seq,
            query: settled.query,
        })
    }

    /// Apply a backend response for request `seq`.
    ///
    /// Stale responses (a newer request has been issued or completed) and
    /// responses arriving after dismissal are discarded.
    pub fn apply_results(&mut self, seq: u64, results: Vec<SearchResult>) {
        if seq < self.issued || seq <= self.completed {
            tracing::debug!(seq, newest = self.issued, "Stale search response discarded");
            return;
        }
        self.completed = seq;

        if !self.open {
            tracing::debug!(seq, "Search response after dismissal ignored");
            return;
        }

        if results.is_empty() {
            self.view = OverlayView::NoMatches;
        } else {
            self.view = OverlayView::Results(self.group(results));
        }
    }

    /// Apply a backend failure for request `seq`: log and degrade to an
    /// empty result set. Never propagates.
    pub fn apply_error(&mut self, seq: u64, error: &SearchError) {
        tracing::warn!(seq, error = %error, "Search request failed");
        self.apply_results(seq, Vec::new());
    }

    /// Select the `index`-th result in display order.
    ///
    /// Clears the query, closes the overlay, and returns the navigation
    /// target. Returns `None` when the index is out of range or the view
    /// holds no results.
    pub fn select(&mut self, index: usize) -> Option<Selection> {
        let url = match &self.view {
            OverlayView::Results(groups) => groups
                .iter()
                .flat_map(|g| g.items.iter())
                .nth(index)
                .map(|item| item.result.url.clone()),
            _ => None,
        }?;

        self.dismiss();
        Some(Selection { url })
    }

    /// Group results by kind in first-seen order, highlighting the current
    /// query. Descriptions are truncated before highlighting.
    fn group(&self, results: Vec<SearchResult>) -> Vec<ResultGroup> {
        let query = self.query.trim();
        let mut groups: Vec<ResultGroup> = Vec::new();

        for result in results {
            let title = highlight(&result.title, query);
            let description = highlight(
                &truncate_chars(&result.description, self.description_limit),
                query,
            );
            let item = ResultItem {
                result,
                title,
                description,
            };

            match groups.iter().position(|g| g.kind == item.result.kind) {
                Some(pos) => groups[pos].items.push(item),
                None => groups.push(ResultGroup {
                    kind: item.result.kind,
                    label: item.result.kind.label(),
                    items: vec![item],
                }),
            }
        }

        groups
    }
}

// =============================================================================
// Tests
// =============================================================================
