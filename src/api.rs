//! Book API access
//!
//! Defines the payload types, the ApiError taxonomy, the HTTP client for the
//! suggestion and detail endpoints, and the background worker that runs it.

use thiserror::Error;

mod client;
mod types;
pub mod worker;

pub use client::BookApiClient;
pub use types::{Book, BookId, Suggestion};
pub use worker::{ApiRequest, ApiResponse, spawn_worker};

/// Errors that can occur while talking to the book API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Base URL cannot carry the API paths
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Transport failure (connect, timeout, reading the body)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("API returned HTTP {code}")]
    Status { code: u16 },

    /// Body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request was superseded before it completed
    #[error("Request cancelled")]
    Cancelled,
}
