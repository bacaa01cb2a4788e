// src/page/links.rs
// =============================================================================
// This module pulls outbound links out of page text.
//
// We use a regular expression instead of a real HTML parser. It looks for
// <a href="..."> (any letter case) and captures everything up to the next
// quote or '>'. This misses unquoted attributes and tags that put other
// attributes before href, and that is accepted: a full parser would discover
// a different set of links.
//
// Links are NOT resolved against the page URL. A relative href like "/docs"
// fails URL validation and is dropped, just like any other non-http link.
// =============================================================================

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::crawl::validate_url;

fn href_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // The pattern is a constant, so failing to compile it is a programmer error
    PATTERN.get_or_init(|| Regex::new(r#"(?i)<a\s+href="([^">]*)[">]"#).unwrap())
}

// Extracts crawlable links from a page
//
// Parameters:
//   page: the page text
//   visited: URLs already processed by the crawler
//   allow_https: passed through to URL validation
//
// Returns: links in the order they appear on the page (duplicates kept)
//
// A candidate is dropped when it is:
//   - empty after trimming
//   - a same-page fragment ("#top")
//   - a mailto link, or contains "javascript" in any letter case
//   - not a valid crawlable URL
//   - already visited
pub fn extract_links(page: &str, visited: &HashSet<String>, allow_https: bool) -> Vec<String> {
    href_pattern()
        .captures_iter(page)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|link| is_candidate(link))
        .filter(|link| validate_url(link, allow_https).is_some())
        .filter(|link| !visited.contains(*link))
        .map(str::to_string)
        .collect()
}

fn is_candidate(link: &str) -> bool {
    !link.is_empty()
        && !link.starts_with('#')
        && !link.contains("mailto")
        && !link.to_lowercase().contains("javascript")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(page: &str) -> Vec<String> {
        extract_links(page, &HashSet::new(), false)
    }

    #[test]
    fn test_extract_absolute_link() {
        let page = r#"<a href="http://www.rust-lang.org/learn">Rust</a>"#;
        assert_eq!(links(page), vec!["http://www.rust-lang.org/learn"]);
    }

    #[test]
    fn test_tag_and_attribute_case_insensitive() {
        let page = r#"<A HREF="http://example.com/upper">x</A>"#;
        assert_eq!(links(page), vec!["http://example.com/upper"]);
    }

    #[test]
    fn test_keeps_page_order_and_duplicates() {
        let page = r#"
            <a href="http://b.example/">b</a>
            <a href="http://a.example/">a</a>
            <a href="http://b.example/">b again</a>
        "#;
        assert_eq!(
            links(page),
            vec!["http://b.example/", "http://a.example/", "http://b.example/"]
        );
    }

    #[test]
    fn test_skips_fragments_mail_and_script() {
        let page = r##"
            <a href="#top">top</a>
            <a href="mailto:me@example.com">mail</a>
            <a href="http://example.com/mailto-form">form</a>
            <a href="JavaScript:void(0)">js</a>
            <a href="http://example.com/javascript/intro">js docs</a>
            <a href="http://example.com/ok">ok</a>
        "##;
        assert_eq!(links(page), vec!["http://example.com/ok"]);
    }

    #[test]
    fn test_skips_empty_relative_and_https() {
        let page = r#"
            <a href="   ">blank</a>
            <a href="/docs">relative</a>
            <a href="https://example.com/secure">secure</a>
        "#;
        assert!(links(page).is_empty());
    }

    #[test]
    fn test_https_allowed_when_enabled() {
        let page = r#"<a href="https://example.com/secure">secure</a>"#;
        let found = extract_links(page, &HashSet::new(), true);
        assert_eq!(found, vec!["https://example.com/secure"]);
    }

    #[test]
    fn test_trims_and_stops_at_angle_bracket() {
        let page = r#"<a href=" http://example.com/a ">a</a><a href="http://example.com/b>b</a>"#;
        assert_eq!(
            links(page),
            vec!["http://example.com/a", "http://example.com/b"]
        );
    }

    #[test]
    fn test_skips_visited() {
        let mut visited = HashSet::new();
        visited.insert("http://example.com/seen".to_string());
        let page = r#"
            <a href="http://example.com/seen">seen</a>
            <a href="http://example.com/new">new</a>
        "#;
        assert_eq!(
            extract_links(page, &visited, false),
            vec!["http://example.com/new"]
        );
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let page = r#"<a href="http://x.example/1">1</a> <a href="http://x.example/2">2</a>"#;
        assert_eq!(links(page), links(page));
    }
}
