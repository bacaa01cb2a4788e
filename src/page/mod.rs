// src/page/mod.rs
// =============================================================================
// Everything the crawler does with a single page.
//
// Submodules:
// - fetch: downloads page text (PageSource trait + reqwest implementation)
// - links: extracts outbound links from page text
// - matcher: checks page text against the keyword query
// =============================================================================

mod fetch;
mod links;
mod matcher;

pub use fetch::{download, HttpFetcher, PageSource};
pub use links::extract_links;
pub use matcher::matches;

#[cfg(test)]
pub use fetch::MemorySource;
