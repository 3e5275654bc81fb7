//! Search-page scraping and image acquisition.
//!
//! This module implements the full scrape pipeline: fetch a search results
//! page, extract `<img>` references from it, and download each reference to
//! disk, all driven by a sequential collection loop with a global success
//! limit.
//!
//! # Example
//!
//! ```no_run
//! use imgrab_core::scrape::{Collector, NoProgress, ScrapeConfig, ScrapeRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let collector = Collector::new(ScrapeConfig::default());
//! let request = ScrapeRequest::new("cats", 10);
//! let images = collector.collect(&request, &NoProgress).await?;
//! println!("Downloaded {} images", images.len());
//! # Ok(())
//! # }
//! ```

mod acquire;
mod collector;
pub mod constants;
mod error;
mod extract;
mod filename;
mod search;

pub use acquire::ImageClient;
pub use collector::{AbortPolicy, Collector, NoProgress, ProgressSink, ScrapeConfig, ScrapeRequest};
pub use error::{FetchError, ScrapeError};
pub use extract::extract_image_refs;
pub use filename::image_filename;
pub use search::SearchClient;

// Note: no module-local Result aliases. Use `Result<T, ScrapeError>` explicitly
// in function signatures.
