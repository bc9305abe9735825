use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "Search for a book...";

/// Single-line query editor
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_style(Style::default().fg(Color::White));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
        textarea.set_placeholder_text(PLACEHOLDER);
        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Feed a key to the editor
    ///
    /// Returns true if the text changed. Keys that would add a second line
    /// or a tab never reach the editor.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_blocked_key(&key) {
            return false;
        }
        let before = self.query().to_string();
        self.textarea.input(key);
        self.query() != before
    }

    /// Remove all text; returns true if there was any
    pub fn clear(&mut self) -> bool {
        if self.query().is_empty() {
            return false;
        }
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        true
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn is_blocked_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Tab | KeyCode::Char('\n' | '\r') => true,
        KeyCode::Char('m') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
