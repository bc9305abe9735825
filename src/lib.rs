//! bookfind: terminal book search with debounced autocomplete suggestions.
//!
//! The binary in `main.rs` wires these modules to a crossterm event loop.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod results;
pub mod search;
pub mod widgets;

#[cfg(test)]
mod test_utils;
