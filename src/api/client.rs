//! HTTP client for the suggestion and book-detail endpoints

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

use super::ApiError;
use super::types::{Book, BookId, Suggestion};

/// Async client for `GET /api/search` and `GET /api/book/<id>`
#[derive(Debug, Clone)]
pub struct BookApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BookApiClient {
    /// Create a client rooted at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let mut builder = reqwest::Client::builder().timeout(timeout);
        // A backend on this machine never sits behind the system proxy
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// URL of the suggestion lookup for `query`
    pub fn search_url(&self, query: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["api", "search"])?;
        url.query_pairs_mut().append_pair("query", query);
        Ok(url)
    }

    /// URL of the detail record for `id`
    pub fn book_url(&self, id: &BookId) -> Result<Url, ApiError> {
        self.endpoint(&["api", "book", &id.to_string()])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Look up suggestions for `query`, in the order the server returns them
    pub async fn search(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        let url = self.search_url(query)?;
        log::debug!("GET {}", url);
        self.get_json(url).await
    }

    /// Fetch the full record for a selected suggestion
    pub async fn book(&self, id: &BookId) -> Result<Book, ApiError> {
        let url = self.book_url(id)?;
        log::debug!("GET {}", url);
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host_str() {
        Some(host) if host.eq_ignore_ascii_case("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<std::net::IpAddr>()
            .is_ok_and(|ip| ip.is_loopback()),
        None => false,
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
