use std::time::Instant;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use super::mouse_events;

impl App {
    /// Route a terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Only process key press events (avoid duplicates on release)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Mouse(mouse) => mouse_events::handle_mouse(self, mouse, now),
            _ => {}
        }
    }

    /// Handle a key press
    ///
    /// Shell keys are handled here; everything else belongs to the search box.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.search.suggest.is_visible() {
                    self.search.dismiss();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::PageDown => self.results.scroll_down(1),
            KeyCode::PageUp => self.results.scroll_up(1),
            _ => self.search.handle_key(key, now),
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
