//! Image Scraper Core Library
//!
//! This library provides the core functionality for the `imgrab` tool, which
//! paginates over Google Images search result pages, extracts image URLs from
//! the returned markup, and downloads a bounded number of them to disk.
//!
//! # Architecture
//!
//! The library is organized around a single module:
//! - [`scrape`] - search page fetching, `<img>` extraction, per-image
//!   acquisition, and the collection loop that drives them

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod scrape;

// Re-export commonly used types
pub use scrape::{
    AbortPolicy, Collector, FetchError, ImageClient, NoProgress, ProgressSink, ScrapeConfig,
    ScrapeError, ScrapeRequest, SearchClient, extract_image_refs,
};
