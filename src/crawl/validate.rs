// src/crawl/validate.rs
// =============================================================================
// Decides whether a string is a URL we are willing to crawl.
//
// Rules:
// - It must start with "http://" (any letter case)
// - It must parse into a URL with a host
//
// "https://" is rejected unless the caller opts in with allow_https. That is
// a known limitation of the crawler, kept on purpose: turning on HTTPS changes
// which pages get visited, so it is an explicit setting and not the default.
// =============================================================================

use url::Url;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

// Validates a URL candidate
//
// Returns: Some(Url) if the candidate can be crawled, None otherwise
//
// Examples:
//   "http://example.com/a"  -> Some(..)
//   "HTTP://Example.com/"   -> Some(..)
//   "https://example.com/"  -> None (unless allow_https)
//   "/relative/path"        -> None
pub fn validate_url(candidate: &str, allow_https: bool) -> Option<Url> {
    let scheme_ok = has_prefix(candidate, HTTP_PREFIX)
        || (allow_https && has_prefix(candidate, HTTPS_PREFIX));
    if !scheme_ok {
        return None;
    }

    let url = Url::parse(candidate).ok()?;
    if url.host_str().map_or(true, str::is_empty) {
        return None;
    }
    Some(url)
}

// Case-insensitive starts_with that never slices inside a UTF-8 character
fn has_prefix(candidate: &str, prefix: &str) -> bool {
    candidate
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
