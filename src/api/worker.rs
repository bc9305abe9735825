//! API Worker Thread
//!
//! Runs HTTP requests on a background thread so the UI never blocks.
//! Receives requests via channel, performs them on a current-thread tokio
//! runtime, and sends tagged results back to the UI thread.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::client::BookApiClient;
use super::types::{Book, BookId, Suggestion};
use super::ApiError;
use crate::error::BookfindError;

/// Request messages sent to the API worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Look up suggestions for a settled query
    Search {
        query: String,
        /// Generation tag, used by the UI to drop stale results
        request_id: u64,
    },
    /// Abandon the search with the given ID
    Cancel { request_id: u64 },
    /// Fetch the detail record for a selected suggestion
    Book { id: BookId },
}

/// Response messages sent back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// Outcome of a search request
    Suggestions {
        request_id: u64,
        query: String,
        result: Result<Vec<Suggestion>, ApiError>,
    },
    /// Outcome of a detail fetch
    Book {
        id: BookId,
        result: Result<Book, ApiError>,
    },
    /// The search was cancelled before it completed
    Cancelled { request_id: u64 },
}

/// Spawn the API worker thread
///
/// The thread exits once every request sender has been dropped; outstanding
/// HTTP calls are abandoned with the runtime.
pub fn spawn_worker(
    client: BookApiClient,
    request_rx: UnboundedReceiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) -> Result<JoinHandle<()>, BookfindError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| BookfindError::Runtime(e.to_string()))?;

    let handle = std::thread::Builder::new()
        .name("bookfind-api".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(client, request_rx, response_tx));
        })?;

    Ok(handle)
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    client: BookApiClient,
    mut request_rx: UnboundedReceiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    let client = Arc::new(client);
    // At most one search is worth finishing: the latest one
    let mut in_flight: Option<(u64, CancellationToken)> = None;

    while let Some(request) = request_rx.recv().await {
        match request {
            ApiRequest::Search { query, request_id } => {
                if let Some((previous_id, token)) = in_flight.take() {
                    log::debug!(
                        "Search {} superseded by {}, cancelling",
                        previous_id,
                        request_id
                    );
                    token.cancel();
                }

                let token = CancellationToken::new();
                in_flight = Some((request_id, token.clone()));
                tokio::spawn(run_search(
                    Arc::clone(&client),
                    query,
                    request_id,
                    token,
                    response_tx.clone(),
                ));
            }
            ApiRequest::Cancel { request_id } => match in_flight.take() {
                Some((active_id, token)) if active_id == request_id => {
                    log::debug!("Cancelling search {}", request_id);
                    token.cancel();
                }
                other => {
                    // Nothing running under that id; just acknowledge
                    in_flight = other;
                    let _ = response_tx.send(ApiResponse::Cancelled { request_id });
                    log::debug!("Cancelled search {} (no active request)", request_id);
                }
            },
            ApiRequest::Book { id } => {
                tokio::spawn(run_book(Arc::clone(&client), id, response_tx.clone()));
            }
        }
    }

    log::debug!("API worker shutting down");
}

/// Run one search, racing it against its cancellation token
async fn run_search(
    client: Arc<BookApiClient>,
    query: String,
    request_id: u64,
    token: CancellationToken,
    response_tx: Sender<ApiResponse>,
) {
    let outcome = tokio::select! {
        biased;
        _ = token.cancelled() => None,
        result = client.search(&query) => Some(result),
    };

    let response = match outcome {
        Some(result) => {
            match &result {
                Ok(suggestions) => log::debug!(
                    "Search {} for {:?} returned {} suggestions",
                    request_id,
                    query,
                    suggestions.len()
                ),
                Err(e) => log::debug!("Search {} for {:?} failed: {}", request_id, query, e),
            }
            ApiResponse::Suggestions {
                request_id,
                query,
                result,
            }
        }
        None => ApiResponse::Cancelled { request_id },
    };

    // UI gone means nobody is waiting for this
    let _ = response_tx.send(response);
}

async fn run_book(client: Arc<BookApiClient>, id: BookId, response_tx: Sender<ApiResponse>) {
    let result = client.book(&id).await;
    if let Err(e) = &result {
        log::debug!("Book {} fetch failed: {}", id, e);
    }
    let _ = response_tx.send(ApiResponse::Book { id, result });
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
