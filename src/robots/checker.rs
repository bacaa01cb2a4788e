// src/robots/checker.rs
// =============================================================================
// The gate consulted before every page fetch.
//
// The first time a host is seen we download http://<host>/robots.txt, parse
// it, and cache the result for the rest of the crawl. Later URLs on the same
// host are checked against the cached rules without touching the network.
//
// Fail-open: if robots.txt can't be fetched (network error, 404, timeout...)
// the host gets an empty rule list and everything on it is allowed. A missing
// or unreachable robots file never blocks crawling. The failure is cached too,
// so it is not retried later in the same run.
//
// The cache belongs to one ExclusionChecker, which belongs to one Crawler.
// Two crawls running side by side never share rules.
// =============================================================================

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use super::rules::HostRules;
use crate::page::PageSource;

pub struct ExclusionChecker {
    source: Arc<dyn PageSource>,
    // host[:port] (lowercase) -> rules
    records: HashMap<String, HostRules>,
}

impl ExclusionChecker {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            records: HashMap::new(),
        }
    }

    // Checks whether the crawler may fetch a URL
    //
    // Parameters:
    //   url: an already validated URL
    //
    // Returns: false only if the host's robots.txt disallows this exact path
    pub async fn is_allowed(&mut self, url: &Url) -> bool {
        let Some(key) = host_key(url) else {
            return true;
        };

        if !self.records.contains_key(&key) {
            let rules = self.load_rules(url.scheme(), &key).await;
            self.records.insert(key.clone(), rules);
        }

        let rules = &self.records[&key];
        let path = url.path();
        let path_and_query = url.query().map(|query| format!("{path}?{query}"));
        let blocked = rules.blocks(std::iter::once(path).chain(path_and_query.as_deref()));

        if blocked {
            debug!(url = %url, "disallowed by robots.txt");
        }
        !blocked
    }

    /// Number of hosts with a cached record
    pub fn cached_hosts(&self) -> usize {
        self.records.len()
    }

    async fn load_rules(&self, scheme: &str, key: &str) -> HostRules {
        // robots.txt is read over plain HTTP unless the page itself is https
        let scheme = if scheme == "https" { "https" } else { "http" };
        let robots_url = match Url::parse(&format!("{scheme}://{key}/robots.txt")) {
            Ok(url) => url,
            Err(e) => {
                warn!(host = key, error = %e, "could not build robots.txt URL, allowing all");
                return HostRules::default();
            }
        };

        match self.source.get_text(&robots_url).await {
            Ok(text) => {
                let rules = HostRules::parse(&text);
                if rules.is_empty() {
                    debug!(host = key, "robots.txt has no Disallow rules");
                } else {
                    debug!(host = key, rules = rules.len(), "cached robots.txt");
                }
                rules
            }
            Err(e) => {
                warn!(host = key, error = %e, "no robots.txt, allowing all");
                HostRules::default()
            }
        }
    }
}

// Cache key for a URL: lowercase host, plus the port when it isn't the default
fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host,
    })
}
