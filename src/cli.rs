// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   bfs-seeker <SEED_URL> <BUDGET> <QUERY>...
//
// The three positional arguments are required. Everything else is an
// optional flag with a sensible default.
// =============================================================================

use clap::Parser;
use std::time::Duration;

use crate::crawl::{CrawlConfig, DEFAULT_USER_AGENT};

#[derive(Parser, Debug)]
#[command(
    name = "bfs-seeker",
    version,
    about = "Crawl a website breadth-first and list the pages that contain all query words",
    long_about = "bfs-seeker starts at a seed URL, follows links breadth-first, respects each host's \
                  robots.txt Disallow rules, and stops after visiting BUDGET pages. Pages containing \
                  every word of the query are printed as results."
)]
pub struct Cli {
    /// URL to start crawling from (must start with http://)
    pub seed_url: String,

    /// Maximum number of pages to visit
    pub budget: usize,

    /// Keywords; a page matches when it contains all of them
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Match keywords with exact letter case
    #[arg(long)]
    pub case_sensitive: bool,

    /// Also crawl https:// URLs (by default only http:// is crawled)
    #[arg(long)]
    pub allow_https: bool,

    /// Output results in JSON format instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Pause between page downloads, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Show debug logs (same as RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    // Turns the parsed arguments into the crawl settings
    //
    // Query words are joined back with single spaces, so
    // `bfs-seeker URL 5 rust async` searches for "rust async".
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig::new(self.seed_url.clone(), self.query.join(" "), self.budget)
            .with_case_sensitive(self.case_sensitive)
            .with_allow_https(self.allow_https)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_delay(Duration::from_millis(self.delay_ms))
            .with_user_agent(self.user_agent.clone())
    }
}
