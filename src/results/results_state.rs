use crate::api::{ApiError, Book, BookId};

/// Message shown when a selected book could not be fetched
pub const BOOK_ERROR_MESSAGE: &str = "Failed to fetch book details. Please try again.";

/// Books fetched so far, oldest first
#[derive(Debug, Default)]
pub struct ResultsState {
    books: Vec<Book>,
    error: Option<String>,
    /// Index of the first card drawn
    scroll: usize,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Apply the outcome of a detail fetch
    pub fn apply_book(&mut self, id: &BookId, result: Result<Book, ApiError>) {
        match result {
            Ok(book) => self.push_book(book),
            Err(e) => {
                log::debug!("Book {} fetch failed: {}", id, e);
                self.fetch_failed();
            }
        }
    }

    pub fn push_book(&mut self, book: Book) {
        log::debug!("Adding book {} to results", book.id);
        self.error = None;
        self.books.push(book);
    }

    pub fn fetch_failed(&mut self) {
        self.error = Some(BOOK_ERROR_MESSAGE.to_string());
    }

    pub fn scroll_down(&mut self, cards: usize) {
        let max = self.books.len().saturating_sub(1);
        self.scroll = (self.scroll + cards).min(max);
    }

    pub fn scroll_up(&mut self, cards: usize) {
        self.scroll = self.scroll.saturating_sub(cards);
    }
}

#[cfg(test)]
#[path = "results_state_tests.rs"]
mod results_state_tests;
