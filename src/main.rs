// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (status lines go to stderr)
// 3. Launch the crawl as a background task and wait for it
// 4. Print the matching URLs (plain or JSON) on stdout
// 5. Exit with proper code (0 = matches found, 1 = no matches, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - config, URL validation, BFS loop
mod error;         // src/error.rs - fetch error type
mod page;          // src/page/ - download, link extraction, keyword matching
mod robots;        // src/robots/ - robots.txt rules per host

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crawl::{CrawlReport, CrawlState, Crawler};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = at least one page matched
//   Ok(1) = crawl finished without matches
//   Err   = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    // Usage errors make clap print help and exit here
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.crawl_config();
    let mut crawler = Crawler::new(config).context("failed to build HTTP client")?;

    // The crawl runs on its own task; inside, it is one sequential loop
    let handle = tokio::spawn(async move {
        let report = crawler.run().await;
        debug_assert_eq!(crawler.state(), CrawlState::Done);
        report
    });
    let report = handle.await.context("crawl task failed")?;

    print_report(&report, cli.json)?;

    Ok(if report.results.is_empty() { 1 } else { 0 })
}

// Logs go to stderr so stdout only carries results.
// RUST_LOG wins over --verbose when it is set.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for url in &report.results {
        println!("{}", url);
    }

    println!();
    println!("📊 Summary:");
    println!("   🔎 Matched: {}", report.results.len());
    println!("   📋 Visited: {}", report.visited.len());
    Ok(())
}
