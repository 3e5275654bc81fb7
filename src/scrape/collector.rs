//! The collection loop: paginate, extract, acquire, until the limit is hit.
//!
//! This module provides the [`Collector`] which drives the whole scrape run:
//! it fetches search result pages at increasing offsets, extracts image
//! references from each, and downloads references one at a time until the
//! requested number of images has been acquired or the pagination ceiling is
//! reached.
//!
//! # Failure model
//!
//! A failed *page* fetch is fatal: without the page there is nothing left to
//! drive the run. A failed *image* acquisition is expected (dead links,
//! hotlink protection) and is silently skipped; the loop keeps working toward
//! its limit. What happens to already-acquired images on a fatal failure is
//! governed by [`AbortPolicy`].

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::acquire::ImageClient;
use super::constants::{DEFAULT_INTER_ITEM_DELAY, DEFAULT_OUTPUT_DIR, PAGE_SIZE, PAGINATION_CEILING};
use super::error::{FetchError, ScrapeError};
use super::extract::extract_image_refs;
use super::filename::image_filename;
use super::search::SearchClient;

/// What to do with already-acquired images when a page fetch fails mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbortPolicy {
    /// Propagate the error; the caller sees a failed run with no results.
    #[default]
    DiscardPartial,
    /// Log the failure and return the images acquired so far.
    KeepPartial,
}

/// A single scrape request: what to search for and how many images to keep.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    /// Free-text search query. Must be non-empty.
    pub query: String,
    /// Maximum number of images to download. Must be at least 1.
    pub limit: usize,
}

impl ScrapeRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(query: impl Into<String>, limit: usize) -> Self {
        Self {
            query: query.into(),
            limit,
        }
    }

    /// Checks the request preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidInput`] if the query is empty (or
    /// whitespace-only) or the limit is zero.
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.query.trim().is_empty() {
            return Err(ScrapeError::invalid_input("search query must not be empty"));
        }
        if self.limit == 0 {
            return Err(ScrapeError::invalid_input("limit must be at least 1"));
        }
        Ok(())
    }
}

/// Run-level configuration for the collector.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Directory where images are saved; created recursively if absent.
    pub output_dir: PathBuf,
    /// Pause inserted after every acquisition attempt, success or failure.
    pub inter_item_delay: Duration,
    /// Partial-result handling on a fatal page fetch failure.
    pub abort_policy: AbortPolicy,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            inter_item_delay: DEFAULT_INTER_ITEM_DELAY,
            abort_policy: AbortPolicy::default(),
        }
    }
}

/// Observer for run progress, advanced to the current success count.
///
/// Implementations must be cheap to call; the collector invokes them from the
/// hot path between downloads. The binary supplies an indicatif-backed
/// implementation; library callers that don't care use [`NoProgress`].
pub trait ProgressSink: Send + Sync {
    /// Called once before the first page fetch, with the requested limit.
    fn begin(&self, total: u64);
    /// Called after each successful acquisition with the new success count.
    fn advance(&self, completed: u64);
    /// Called once when the run ends, successfully or not.
    fn finish(&self);
}

/// A `ProgressSink` that ignores all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn begin(&self, _total: u64) {}
    fn advance(&self, _completed: u64) {}
    fn finish(&self) {}
}

/// Drives the scrape run: pagination, extraction, and per-image acquisition.
///
/// The loop is strictly sequential. One page fetch, then one acquisition at a
/// time, with a fixed pause after every attempt. All mutable state (the
/// offset counter and the list of acquired paths) lives in the call frame of
/// [`collect`](Self::collect); the collector itself is immutable and
/// reusable across runs.
#[derive(Debug, Clone)]
pub struct Collector {
    search: SearchClient,
    images: ImageClient,
    config: ScrapeConfig,
}

impl Collector {
    /// Creates a collector with default clients and the given configuration.
    #[must_use]
    pub fn new(config: ScrapeConfig) -> Self {
        Self::with_clients(SearchClient::new(), ImageClient::new(), config)
    }

    /// Creates a collector with explicit clients.
    ///
    /// Used by tests to point the search client at a mock server.
    #[must_use]
    pub fn with_clients(search: SearchClient, images: ImageClient, config: ScrapeConfig) -> Self {
        Self {
            search,
            images,
            config,
        }
    }

    /// Returns the run configuration.
    #[must_use]
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Runs the collection loop for `request`.
    ///
    /// Pages through search results at offsets 0, 100, 200, … below the
    /// pagination ceiling, downloading extracted references in order until
    /// `request.limit` images have been saved. Returns the ordered list of
    /// saved file paths; the list is shorter than the limit when the ceiling
    /// is exhausted first, which is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidInput`] (before any I/O) if the request
    /// preconditions fail, or [`ScrapeError::Fetch`] if a page fetch or the
    /// output directory creation fails and the abort policy is
    /// [`AbortPolicy::DiscardPartial`].
    #[instrument(skip(self, request, progress), fields(query = %request.query, limit = request.limit))]
    pub async fn collect(
        &self,
        request: &ScrapeRequest,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<PathBuf>, ScrapeError> {
        request.validate()?;

        tokio::fs::create_dir_all(&self.config.output_dir)
            .await
            .map_err(|e| FetchError::io(self.config.output_dir.clone(), e))?;

        info!(output_dir = %self.config.output_dir.display(), "starting scrape run");
        progress.begin(request.limit as u64);

        let mut acquired: Vec<PathBuf> = Vec::new();
        let mut offset = 0;

        while offset < PAGINATION_CEILING && acquired.len() < request.limit {
            let page = match self.search.fetch_page(&request.query, offset).await {
                Ok(page) => page,
                Err(e) if self.config.abort_policy == AbortPolicy::KeepPartial => {
                    warn!(offset, error = %e, "page fetch failed, keeping partial results");
                    progress.finish();
                    return Ok(acquired);
                }
                Err(e) => {
                    progress.finish();
                    return Err(e.into());
                }
            };

            let refs = extract_image_refs(&page);
            debug!(offset, refs = refs.len(), "processing page");

            for (position, reference) in refs.iter().enumerate() {
                if acquired.len() >= request.limit {
                    break;
                }

                // 1-based running index across pages
                let index = offset + position + 1;
                let dest = self
                    .config
                    .output_dir
                    .join(image_filename(&request.query, index));

                match self.images.acquire(reference, &dest).await {
                    Ok(()) => {
                        acquired.push(dest);
                        progress.advance(acquired.len() as u64);
                    }
                    Err(e) => {
                        // Dead or blocked references are expected; skip and move on
                        debug!(index, error = %e, "skipping reference");
                    }
                }

                tokio::time::sleep(self.config.inter_item_delay).await;
            }

            offset += PAGE_SIZE;
        }

        progress.finish();
        info!(count = acquired.len(), "scrape run complete");
        Ok(acquired)
    }
}
