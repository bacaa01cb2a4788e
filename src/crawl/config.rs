// src/crawl/config.rs
// =============================================================================
// The settings for one crawl run.
//
// A CrawlConfig is built once (from the CLI, or directly in tests) and then
// handed to the Crawler, which never changes it. Everything that can vary
// between runs lives here instead of in global statics.
// =============================================================================

use std::time::Duration;

/// Default per-request timeout, same as the HTTP client used for link checks
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("bfs-seeker/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// First URL placed on the frontier
    pub seed: String,
    /// Whitespace-separated keywords; a page matches when it contains all of them
    pub query: String,
    /// Maximum number of URLs marked as visited
    pub budget: usize,
    pub case_sensitive: bool,
    /// Also accept https:// URLs (off by default: only http:// is crawled)
    pub allow_https: bool,
    pub timeout: Duration,
    /// Pause after each page download
    pub delay: Duration,
    pub user_agent: String,
}

impl CrawlConfig {
    /// Creates a config with the defaults: case-insensitive, http only,
    /// 10 second timeout, no delay between requests.
    pub fn new(seed: impl Into<String>, query: impl Into<String>, budget: usize) -> Self {
        Self {
            seed: seed.into(),
            query: query.into(),
            budget,
            case_sensitive: false,
            allow_https: false,
            timeout: DEFAULT_TIMEOUT,
            delay: Duration::ZERO,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_allow_https(mut self, allow_https: bool) -> Self {
        self.allow_https = allow_https;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
