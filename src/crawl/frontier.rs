// src/crawl/frontier.rs
// =============================================================================
// This module implements the crawl itself: a breadth-first walk over links.
//
// How it works:
// 1. Put the seed URL in a queue
// 2. Take the URL at the front of the queue
// 3. Skip it if it's not a crawlable http:// URL, already visited, or
//    disallowed by the host's robots.txt
// 4. Mark it visited (this is what uses up the budget)
// 5. Download the page; if that fails, move on
// 6. Append the page's links to the back of the queue and check the page
//    against the query
// 7. Repeat until the queue is empty or the budget is used up
//
// The queue is allowed to hold duplicates and junk. Nothing is filtered on the
// way in; everything is filtered on the way out.
//
// One crawl = one Crawler. The queue, visited set and robots cache are plain
// fields, so any number of crawlers can run at once without sharing state.
// Inside a crawl every step finishes before the next one starts.
//
// Rust concepts:
// - VecDeque: FIFO queue for breadth-first order
// - HashSet: O(1) "have we seen this URL?" lookups
// - Arc<dyn Trait>: shared, swappable page source
// =============================================================================

use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::config::CrawlConfig;
use super::validate::validate_url;
use crate::error::FetchError;
use crate::page::{self, HttpFetcher, PageSource};
use crate::robots::ExclusionChecker;

/// Lifecycle of a Crawler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    Idle,
    Running,
    Done,
}

/// What a finished crawl found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlReport {
    /// Pages that matched the query, in the order they were visited
    pub results: Vec<String>,
    /// Every URL marked visited, in visit order
    pub visited: Vec<String>,
}

pub struct Crawler {
    config: CrawlConfig,
    source: Arc<dyn PageSource>,
    exclusion: ExclusionChecker,
    queue: VecDeque<String>,
    visited: HashSet<String>,
    report: CrawlReport,
    state: CrawlState,
}

impl Crawler {
    // Creates a crawler that fetches over HTTP
    //
    // Fails only if the HTTP client can't be built.
    pub fn new(config: CrawlConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(config.timeout, &config.user_agent)?;
        Ok(Self::with_source(config, Arc::new(fetcher)))
    }

    /// Creates a crawler that reads pages (and robots.txt files) from `source`
    pub fn with_source(config: CrawlConfig, source: Arc<dyn PageSource>) -> Self {
        Self {
            exclusion: ExclusionChecker::new(source.clone()),
            config,
            source,
            queue: VecDeque::new(),
            visited: HashSet::new(),
            report: CrawlReport::default(),
            state: CrawlState::Idle,
        }
    }

    pub fn state(&self) -> CrawlState {
        self.state
    }

    // Runs the crawl to completion
    //
    // Returns: everything found. Nothing collected is ever thrown away, even
    // when the crawl stops because the budget ran out.
    //
    // A crawler only runs once; calling run() again returns the same report.
    pub async fn run(&mut self) -> CrawlReport {
        if self.state != CrawlState::Idle {
            return self.report.clone();
        }

        if self.config.seed.is_empty() {
            warn!("empty seed URL, nothing to crawl");
            self.state = CrawlState::Done;
            return self.report.clone();
        }
        if self.config.budget == 0 {
            warn!("visit budget must be at least 1");
            self.state = CrawlState::Done;
            return self.report.clone();
        }

        self.state = CrawlState::Running;
        info!(
            seed = %self.config.seed,
            query = %self.config.query,
            budget = self.config.budget,
            "crawl started"
        );

        self.queue.push_back(self.config.seed.clone());

        while self.visited.len() < self.config.budget {
            let Some(candidate) = self.queue.pop_front() else {
                break;
            };
            self.process(candidate).await;
        }

        self.state = CrawlState::Done;
        info!(
            visited = self.report.visited.len(),
            matched = self.report.results.len(),
            pending = self.queue.len(),
            hosts = self.exclusion.cached_hosts(),
            "crawl finished"
        );
        self.report.clone()
    }

    // One loop iteration for one dequeued URL
    async fn process(&mut self, candidate: String) {
        let Some(url) = validate_url(&candidate, self.config.allow_https) else {
            debug!(url = %candidate, "skipping invalid URL");
            return;
        };

        if self.visited.contains(&candidate) {
            debug!(url = %candidate, "skipping already visited URL");
            return;
        }

        if !self.exclusion.is_allowed(&url).await {
            return;
        }

        // Counts toward the budget from here on, even if the download fails
        self.visited.insert(candidate.clone());
        self.report.visited.push(candidate.clone());
        info!(url = %candidate, "visiting");

        let content = match page::download(self.source.as_ref(), &url).await {
            Ok(content) => content,
            Err(e) => {
                warn!(url = %candidate, error = %e, "download failed");
                return;
            }
        };

        if !content.is_empty() {
            let links = page::extract_links(&content, &self.visited, self.config.allow_https);
            debug!(url = %candidate, links = links.len(), "links found");
            self.queue.extend(links);

            if page::matches(&self.config.query, &content, self.config.case_sensitive) {
                info!(url = %candidate, "match");
                self.report.results.push(candidate);
            }
        }

        // Polite crawling: optional pause between page downloads
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `visited` marked at dequeue time and not when a link is found?
//    - The same link can be found on many pages before we get to it
//    - The queue may hold it several times; only the first copy is processed
//    - The visited set only grows, and each URL enters it exactly once
//
// 2. What is `let Some(x) = ... else { ... };`?
//    - "let-else": bind x if the pattern matches, otherwise run the else
//      block, which must leave the function or loop (return/break/continue)
//
// 3. Why does run() take &mut self instead of self?
//    - The crawler keeps its state (and final report) after the run
//    - Callers can ask state() afterwards and see CrawlState::Done
// -----------------------------------------------------------------------------
