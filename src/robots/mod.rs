// src/robots/mod.rs
// =============================================================================
// Per-host exclusion rules (robots.txt).
//
// Submodules:
// - rules: parses a robots.txt file into disallowed paths
// - checker: fetches and caches rules per host, answers "may I fetch this?"
//
// Only flat "Disallow:" paths are supported. No wildcards, no Crawl-delay,
// no per-user-agent sections.
// =============================================================================

mod checker;
mod rules;

pub use checker::ExclusionChecker;
