// src/page/fetch.rs
// =============================================================================
// This module downloads pages.
//
// Two layers:
// - PageSource: a trait for "give me the body of this URL as text". The real
//   implementation (HttpFetcher) uses reqwest; tests use an in-memory map.
// - download(): reads a page through any PageSource and joins its lines
//   together without separators, which is the text the crawler works with.
//
// Both the crawler and the robots.txt checker read through a PageSource, so a
// single HTTP client (with its connection pool) is shared by the whole crawl.
//
// Rust concepts:
// - Trait objects (&dyn PageSource): swap implementations at runtime
// - BoxFuture: lets a trait method be async and still be object-safe
// =============================================================================

use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::error::FetchError;

/// Anything that can return the text body of a URL.
pub trait PageSource: Send + Sync {
    fn get_text<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<String, FetchError>>;
}

/// PageSource backed by a real HTTP client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Creates the HTTP client
    //
    // The timeout is what keeps one unresponsive host from stalling the whole
    // crawl, since pages are fetched one at a time.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    fn get_text<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<String, FetchError>> {
        async move {
            let response = self.client.get(url.clone()).send().await?;

            // Anything but 2xx counts as a failed download
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            // Body is treated as text whatever the content-type says
            Ok(response.text().await?)
        }
        .boxed()
    }
}

// Downloads a page and flattens it to a single line
//
// Returns: the page text with line breaks removed, or the reason it failed
//
// Example:
//   body "<p>foo</p>\r\n<p>bar</p>\n" -> "<p>foo</p><p>bar</p>"
pub async fn download(source: &dyn PageSource, url: &Url) -> Result<String, FetchError> {
    let body = source.get_text(url).await?;
    Ok(body.lines().collect())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why BoxFuture instead of `async fn` in the trait?
//    - We store the source as Arc<dyn PageSource> (a trait object)
//    - Trait objects need every method to return a known-size type
//    - BoxFuture is a heap-allocated, pinned future: always the same size
//    - .boxed() (from FutureExt) turns an async block into a BoxFuture
//
// 2. Why `Send + Sync` on the trait?
//    - The crawl runs inside tokio::spawn, which may move it between threads
//    - Everything the crawl holds across an .await must be Send
//
// 3. What does body.lines().collect() do?
//    - lines() splits on "\n" and also strips a trailing "\r"
//    - Collecting an iterator of &str into a String concatenates them
// -----------------------------------------------------------------------------

#[cfg(test)]
pub use memory::MemorySource;
