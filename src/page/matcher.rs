// src/page/matcher.rs
// =============================================================================
// Decides whether a page matches the keyword query.
//
// The query is split on whitespace into terms, and every term must appear
// somewhere in the page as a plain substring (AND, no phrases, no OR).
// An empty query matches nothing.
// =============================================================================

use regex::Regex;
use std::sync::OnceLock;

fn whitespace() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").unwrap())
}

pub fn matches(query: &str, content: &str, case_sensitive: bool) -> bool {
    let terms: Vec<&str> = whitespace()
        .split(query)
        .filter(|term| !term.is_empty())
        .collect();

    if terms.is_empty() || content.is_empty() {
        return false;
    }

    if case_sensitive {
        terms.iter().all(|term| content.contains(term))
    } else {
        let content = content.to_lowercase();
        terms
            .iter()
            .all(|term| content.contains(&term.to_lowercase()))
    }
}
