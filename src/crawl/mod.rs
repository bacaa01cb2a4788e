// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl: configuration, URL validation and the
// breadth-first frontier loop.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Stops after a fixed number of visited pages (the visit budget)
// - Respects each host's robots.txt Disallow lines
// - Collects the pages whose text matches a keyword query
// =============================================================================

mod config;
mod frontier;
mod validate;

pub use config::{CrawlConfig, DEFAULT_USER_AGENT};
pub use frontier::{CrawlReport, CrawlState, Crawler};
pub use validate::validate_url;
