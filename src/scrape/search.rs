//! HTTP client for fetching search result pages.
//!
//! This module provides the `SearchClient` struct which issues one GET per
//! pagination offset against the image search endpoint and returns the raw
//! HTML payload.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, instrument};
use url::Url;

use super::constants::{
    BROWSER_USER_AGENT, CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, SEARCH_ENDPOINT,
};
use super::error::FetchError;

/// HTTP client for fetching image search result pages.
///
/// Designed to be created once and reused across pages, taking advantage of
/// connection pooling. Every request carries a fixed desktop browser
/// User-Agent so the endpoint serves the image grid markup.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: String,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchClient {
    /// Creates a new search client pointed at the Google Images endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(SEARCH_ENDPOINT)
    }

    /// Creates a search client pointed at a custom endpoint.
    ///
    /// Used by tests to target a mock server; production code uses
    /// [`SearchClient::new`].
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_endpoint(endpoint: &str) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .read_timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    /// Fetches one search results page for `query` at pagination `offset`.
    ///
    /// Issues a single GET with the query, the image-search parameters, and
    /// the offset embedded as URL parameters. No retries are attempted.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails at the transport level, times
    /// out, or the server responds with a non-success status.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_page(&self, query: &str, offset: usize) -> Result<String, FetchError> {
        let url = self.page_url(query, offset);

        debug!(%url, "fetching search page");

        let response = self
            .client
            .get(url.as_str())
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::timeout(url.as_str())
                } else {
                    FetchError::network(url.as_str(), e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url.as_str(), status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::network(url.as_str(), e))
    }

    /// Builds the page URL for `query` at `offset`.
    ///
    /// `tbm=isch` selects image search, `tbs=isz:lt` filters for large images.
    #[allow(clippy::expect_used)]
    fn page_url(&self, query: &str, offset: usize) -> Url {
        let offset_value = offset.to_string();
        let params = [
            ("q", query),
            ("tbm", "isch"),
            ("tbs", "isz:lt"),
            ("start", offset_value.as_str()),
        ];
        Url::parse_with_params(&self.endpoint, params)
            .expect("search endpoint is a valid base URL")
    }
}
