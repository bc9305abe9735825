//! Fetched books, shown as cards under the search box

pub mod results_render;
mod results_state;

pub use results_state::{BOOK_ERROR_MESSAGE, ResultsState};
