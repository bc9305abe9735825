//! Search box controller
//!
//! Ties the query editor to the suggestion lifecycle and hands selections to
//! the `on_select` callback supplied by the page shell.

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::input_state::InputState;
use super::suggest_state::SuggestState;
use crate::api::BookId;

pub struct SearchBox {
    pub input: InputState,
    pub suggest: SuggestState,
    on_select: Box<dyn FnMut(BookId)>,
}

impl SearchBox {
    pub fn new(debounce_ms: u64, on_select: impl FnMut(BookId) + 'static) -> Self {
        Self {
            input: InputState::new(),
            suggest: SuggestState::new(debounce_ms),
            on_select: Box::new(on_select),
        }
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Handle a key while the search box has focus
    ///
    /// Up/Down/Enter drive the suggestion list and never reach the editor.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Down => self.suggest.focus_next(),
            KeyCode::Up => self.suggest.focus_previous(),
            KeyCode::Enter => {
                if let Some(id) = self.suggest.select_focused() {
                    self.finish_selection(id, now);
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear(now);
            }
            _ => {
                if self.input.handle_key(key) {
                    self.query_changed(now);
                }
            }
        }
    }

    pub fn click_suggestion(&mut self, index: usize, now: Instant) {
        if let Some(id) = self.suggest.select(index) {
            self.finish_selection(id, now);
        }
    }

    pub fn hover(&mut self, index: usize) {
        self.suggest.hover(index);
    }

    /// Clear control: empties the query; the list follows the empty query
    pub fn clear(&mut self, now: Instant) {
        if self.input.clear() {
            self.query_changed(now);
        }
    }

    /// Outside click: hide the list, keep the query
    pub fn dismiss(&mut self) {
        self.suggest.dismiss();
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.suggest.tick(now)
    }

    pub fn deactivate(&mut self) {
        self.suggest.deactivate();
    }

    fn query_changed(&mut self, now: Instant) {
        let query = self.input.query().to_string();
        self.suggest.on_query_changed(&query, now);
    }

    fn finish_selection(&mut self, id: BookId, now: Instant) {
        log::debug!("Selected book {}", id);
        (self.on_select)(id);
        self.input.clear();
        self.query_changed(now);
    }
}

#[cfg(test)]
#[path = "search_box_tests.rs"]
mod search_box_tests;
