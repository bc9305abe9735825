//! Suggestion lifecycle state
//!
//! Owns the debounced fetch lifecycle: query changes arm the debouncer, an
//! expired debouncer sends a tagged search request to the API worker, and
//! only the response carrying the latest tag is allowed to replace the
//! suggestion sequence.

use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use super::debouncer::Debouncer;
use super::focus_state::FocusState;
use crate::api::{ApiError, ApiRequest, BookId, Suggestion};

/// Message shown for any failed suggestion lookup
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch suggestions. Please try again.";

/// Where the widget is in the type → debounce → fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestPhase {
    Idle,
    Debouncing,
    Fetching,
    Suggesting,
    Erroring,
}

/// Suggestion controller state
pub struct SuggestState {
    suggestions: Vec<Suggestion>,
    focus: FocusState,
    loading: bool,
    error: Option<String>,
    debouncer: Debouncer,
    /// Query captured at the last change, sent when the debouncer fires
    pending_query: String,
    /// Generation counter, incremented for every issued search
    request_id: u64,
    /// Tag of the only search whose response will be accepted
    in_flight_request_id: Option<u64>,
    request_tx: Option<UnboundedSender<ApiRequest>>,
}

impl SuggestState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            suggestions: Vec::new(),
            focus: FocusState::new(),
            loading: false,
            error: None,
            debouncer: Debouncer::new(debounce_ms),
            pending_query: String::new(),
            request_id: 0,
            in_flight_request_id: None,
            request_tx: None,
        }
    }

    /// Set the channel used to reach the API worker
    pub fn set_channel(&mut self, request_tx: UnboundedSender<ApiRequest>) {
        self.request_tx = Some(request_tx);
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_visible(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focus.get()
    }

    pub fn focused(&self) -> Option<&Suggestion> {
        self.focus.get().and_then(|index| self.suggestions.get(index))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn phase(&self) -> SuggestPhase {
        if self.loading {
            SuggestPhase::Fetching
        } else if self.debouncer.is_pending() {
            SuggestPhase::Debouncing
        } else if self.error.is_some() {
            SuggestPhase::Erroring
        } else if !self.suggestions.is_empty() {
            SuggestPhase::Suggesting
        } else {
            SuggestPhase::Idle
        }
    }

    /// React to a change of the query text
    ///
    /// An empty query empties the list immediately and never reaches the
    /// network. Anything else (re)arms the debouncer. Either way the search
    /// in flight no longer matches the query and is abandoned.
    pub fn on_query_changed(&mut self, query: &str, now: Instant) {
        self.cancel_in_flight_request();

        if query.is_empty() {
            self.debouncer.cancel();
            self.pending_query.clear();
            self.replace_suggestions(Vec::new());
            return;
        }

        self.pending_query = query.to_string();
        self.debouncer.schedule(now);
    }

    /// Advance the debounce timer
    ///
    /// Returns true if a search request was issued.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.debouncer.fire(now) || self.pending_query.is_empty() {
            return false;
        }
        let query = self.pending_query.clone();
        self.send_search(query)
    }

    /// How long the event loop may sleep before the debouncer needs a tick
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    fn send_search(&mut self, query: String) -> bool {
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        self.error = None;

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(ApiRequest::Search {
                query: query.clone(),
                request_id,
            })
            .is_ok()
        });

        if sent {
            log::debug!("Issued search {} for {:?}", request_id, query);
            self.loading = true;
            self.in_flight_request_id = Some(request_id);
        } else {
            log::debug!("API worker unavailable, search {} for {:?} dropped", request_id, query);
            self.fail();
        }
        sent
    }

    /// Apply the outcome of a search
    ///
    /// Returns false (and changes nothing) when the response belongs to a
    /// superseded request.
    pub fn apply_response(
        &mut self,
        request_id: u64,
        result: Result<Vec<Suggestion>, ApiError>,
    ) -> bool {
        if self.in_flight_request_id != Some(request_id) {
            log::debug!(
                "Discarding stale search {} (current: {:?})",
                request_id,
                self.in_flight_request_id
            );
            return false;
        }

        self.in_flight_request_id = None;
        self.loading = false;

        match result {
            Ok(suggestions) => {
                self.error = None;
                self.replace_suggestions(suggestions);
            }
            Err(e) => {
                log::debug!("Search {} failed: {}", request_id, e);
                self.fail();
            }
        }
        true
    }

    /// The worker confirmed a cancellation
    pub fn apply_cancelled(&mut self, request_id: u64) {
        if self.in_flight_request_id == Some(request_id) {
            self.in_flight_request_id = None;
            self.loading = false;
        }
    }

    fn fail(&mut self) {
        self.loading = false;
        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
        self.replace_suggestions(Vec::new());
    }

    fn replace_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        // A new sequence never inherits the old focus
        self.focus.clear();
        self.focus.sync_len(self.suggestions.len());
    }

    fn cancel_in_flight_request(&mut self) {
        if let Some(request_id) = self.in_flight_request_id.take() {
            if let Some(tx) = &self.request_tx
                && tx.send(ApiRequest::Cancel { request_id }).is_ok()
            {
                log::debug!("Sent cancel for search {}", request_id);
            }
            self.loading = false;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus.move_down(self.suggestions.len());
    }

    pub fn focus_previous(&mut self) {
        self.focus.move_up(self.suggestions.len());
    }

    pub fn hover(&mut self, index: usize) {
        self.focus.hover(index, self.suggestions.len());
    }

    /// Take the id at `index` and empty the list
    pub fn select(&mut self, index: usize) -> Option<BookId> {
        let id = self.suggestions.get(index)?.id.clone();
        self.replace_suggestions(Vec::new());
        Some(id)
    }

    /// Take the focused id, if any
    pub fn select_focused(&mut self) -> Option<BookId> {
        let index = self.focus.get()?;
        self.select(index)
    }

    /// Hide the list without touching the query (outside click)
    pub fn dismiss(&mut self) {
        self.replace_suggestions(Vec::new());
    }

    /// Release the timer and any outstanding request
    ///
    /// Safe to call more than once.
    pub fn deactivate(&mut self) {
        self.debouncer.cancel();
        self.cancel_in_flight_request();
    }
}

impl Drop for SuggestState {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
