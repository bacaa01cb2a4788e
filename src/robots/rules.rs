// src/robots/rules.rs
// =============================================================================
// Parses a robots.txt file into a flat list of disallowed paths.
//
// Only lines that start with exactly "Disallow:" count. Everything else
// (User-agent, Allow, Crawl-delay, Sitemap, blank lines, comments) is ignored,
// so rules for every user agent are merged into one list.
//
// Example:
//   "Disallow: /private   # keep out"  ->  "/private"
// =============================================================================

const DISALLOW: &str = "Disallow:";

/// Disallowed paths for one host, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRules {
    disallowed: Vec<String>,
}

impl HostRules {
    pub fn parse(text: &str) -> Self {
        let disallowed = text
            .lines()
            .filter_map(|line| line.strip_prefix(DISALLOW))
            .map(|rest| match rest.find('#') {
                Some(comment) => &rest[..comment],
                None => rest,
            })
            .map(str::trim)
            // "Disallow:" with no path blocks nothing
            .filter(|path| !path.is_empty())
            .map(str::to_string)
            .collect();

        Self { disallowed }
    }

    pub fn is_empty(&self) -> bool {
        self.disallowed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.disallowed.len()
    }

    // A path is blocked when it equals one of the rules exactly.
    // `candidates` is the URL's path, and its path?query when there is a query.
    pub fn blocks<'a>(&self, mut candidates: impl Iterator<Item = &'a str>) -> bool {
        candidates.any(|candidate| self.disallowed.iter().any(|rule| rule == candidate))
    }
}
