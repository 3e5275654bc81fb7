//! Per-image acquisition: fetch a reference's bytes and persist them to disk.
//!
//! Acquisition is a best-effort operation. Whatever bytes the server returns
//! are written as-is, with no content-type or integrity validation; the
//! collection loop decides what to do with failures.

use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, instrument};

use super::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use super::error::FetchError;

/// HTTP client for downloading individual images with streaming support.
///
/// Created once and reused for every acquisition in a run, taking advantage
/// of connection pooling.
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
}

impl Default for ImageClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageClient {
    /// Creates a new image client with default timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .read_timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Downloads `reference` and writes the byte stream to `dest`.
    ///
    /// Any existing file at `dest` is overwritten. On a mid-stream failure the
    /// partial file is removed so no truncated image is left behind.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails (network error, timeout),
    /// the server returns a non-success status, or writing to disk fails.
    #[instrument(skip(self), fields(reference = %reference, dest = %dest.display()))]
    pub async fn acquire(&self, reference: &str, dest: &Path) -> Result<(), FetchError> {
        let response = self.client.get(reference).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::timeout(reference)
            } else {
                FetchError::network(reference, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(reference, status.as_u16()));
        }

        let result = stream_to_file(response, reference, dest).await;
        if result.is_err() {
            debug!(path = %dest.display(), "cleaning up partial file after error");
            let _ = tokio::fs::remove_file(dest).await;
        }
        result
    }
}

/// Streams the response body to `dest`, attaching write error context.
async fn stream_to_file(
    response: reqwest::Response,
    reference: &str,
    dest: &Path,
) -> Result<(), FetchError> {
    let file = File::create(dest)
        .await
        .map_err(|e| FetchError::io(dest, e))?;
    let mut writer = BufWriter::new(file);

    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| FetchError::network(reference, e))?;
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| FetchError::io(dest, e))?;
        bytes_written += chunk.len() as u64;
    }

    writer.flush().await.map_err(|e| FetchError::io(dest, e))?;

    debug!(bytes = bytes_written, "image written");
    Ok(())
}
