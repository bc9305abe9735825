use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use crate::api::{ApiRequest, ApiResponse, BookId};
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::results::ResultsState;
use crate::search::SearchBox;

/// Longest the event loop waits for input before ticking
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub search: SearchBox,
    pub results: ResultsState,
    /// Regions from the last render, used for mouse hit testing
    pub layout: LayoutRegions,
    response_rx: Receiver<ApiResponse>,
    pub(super) should_quit: bool,
}

impl App {
    /// Create the app around the API worker's channels
    ///
    /// Selecting a suggestion sends a detail request for its id on
    /// `request_tx`; the result comes back on `response_rx`.
    pub fn new(
        config: &Config,
        request_tx: UnboundedSender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) -> Self {
        let book_tx = request_tx.clone();
        let on_select = move |id: BookId| {
            log::debug!("Requesting details for book {}", id);
            if book_tx.send(ApiRequest::Book { id }).is_err() {
                log::debug!("API worker unavailable, book request dropped");
            }
        };

        let mut search = SearchBox::new(config.search.debounce_ms, on_select);
        search.suggest.set_channel(request_tx);

        Self {
            search,
            results: ResultsState::new(),
            layout: LayoutRegions::new(),
            response_rx,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How long to wait for the next terminal event
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.search
            .suggest
            .time_until_due(now)
            .map_or(TICK_INTERVAL, |due| due.min(TICK_INTERVAL))
    }

    /// Apply worker responses, then advance the debounce timer
    pub fn tick(&mut self, now: Instant) {
        self.drain_responses();
        self.search.tick(now);
    }

    fn drain_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            match response {
                ApiResponse::Suggestions {
                    request_id,
                    query,
                    result,
                } => {
                    if self.search.suggest.apply_response(request_id, result) {
                        log::debug!("Applied search {} for {:?}", request_id, query);
                    }
                }
                ApiResponse::Cancelled { request_id } => {
                    self.search.suggest.apply_cancelled(request_id);
                }
                ApiResponse::Book { id, result } => self.results.apply_book(&id, result),
            }
        }
    }

    /// Stop timers and abandon outstanding searches before shutdown
    pub fn deactivate(&mut self) {
        self.search.deactivate();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
