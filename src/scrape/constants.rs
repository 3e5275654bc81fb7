//! Constants for the scrape module (pagination, pacing, timeouts).

use std::time::Duration;

/// Fixed increment by which the pagination offset advances each page.
pub const PAGE_SIZE: usize = 100;

/// Upper bound on the pagination offset; limits total pages visited.
pub const PAGINATION_CEILING: usize = 1000;

/// Default directory where downloaded images are saved.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Default pause between image download attempts.
pub const DEFAULT_INTER_ITEM_DELAY: Duration = Duration::from_millis(1000);

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default HTTP read timeout (60 seconds; images are small).
pub const READ_TIMEOUT_SECS: u64 = 60;

/// Search endpoint queried for each results page.
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Desktop browser User-Agent sent with every search page request.
///
/// The search endpoint serves a stripped-down page to unidentified clients;
/// a browser-like User-Agent is required to get the image grid markup.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";
