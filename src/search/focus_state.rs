//! Keyboard focus within the suggestion list
//!
//! The index is always `None` or a valid position in the current suggestion
//! sequence. Callers report the sequence length on every move and call
//! `sync_len` whenever the sequence is replaced.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    index: Option<usize>,
}

impl FocusState {
    pub fn new() -> Self {
        Self { index: None }
    }

    pub fn get(&self) -> Option<usize> {
        self.index
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Move down one row, stopping at the last suggestion
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            self.index = None;
            return;
        }
        self.index = Some(match self.index {
            None => 0,
            Some(current) => (current + 1).min(len - 1),
        });
    }

    /// Move up one row, stopping at the first suggestion
    ///
    /// From no focus this lands on the first row, never back to `None`.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            self.index = None;
            return;
        }
        self.index = Some(match self.index {
            Some(current) if current > 0 => (current - 1).min(len - 1),
            _ => 0,
        });
    }

    /// Focus a row under the pointer
    pub fn hover(&mut self, index: usize, len: usize) {
        if index < len {
            self.index = Some(index);
        }
    }

    /// Drop the index if it no longer points into a sequence of `len`
    pub fn sync_len(&mut self, len: usize) {
        if self.index.is_some_and(|index| index >= len) {
            self.index = None;
        }
    }
}

#[cfg(test)]
#[path = "focus_state_tests.rs"]
mod focus_state_tests;
