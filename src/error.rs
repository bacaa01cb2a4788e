// src/error.rs
// =============================================================================
// Typed errors for reading pages over the network.
//
// The crawl itself never fails because of a single bad page: every FetchError
// is caught by whoever asked for the page and turned into "skip this URL" or
// "no robots rules for this host". That is why there is no CrawlError type.
// =============================================================================

use thiserror::Error;

/// Why a page (or a robots.txt file) could not be read.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response (DNS, connect, timeout...)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// An in-memory source had no entry for the URL
    #[allow(dead_code)]
    #[error("no content registered for {0}")]
    Missing(String),
}
