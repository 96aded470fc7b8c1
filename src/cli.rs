// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use std::num::NonZeroUsize;

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version,
    about = "Crawl a single subdomain and list the in-site links on every page",
    long_about = "site-mapper starts from one URL, follows links breadth-first without ever \
                  leaving that URL's host, and prints each visited page together with the \
                  links on it that stay on the same host."
)]
pub struct Cli {
    /// Starting URL (e.g. https://example.com/)
    ///
    /// Only pages on exactly this host (and port) are crawled.
    #[arg(long = "start-url", visible_alias = "start_url")]
    pub start_url: String,

    /// Maximum number of pages to visit (must be at least 1)
    #[arg(long, default_value = "500")]
    pub max_pages: NonZeroUsize,

    /// Maximum number of link hops from the starting page
    ///
    /// 0 = only the starting page is fetched
    #[arg(long, default_value_t = 32)]
    pub max_depth: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    /// (defaults to site-mapper/<version>)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Output results in JSON format instead of text
    #[arg(long)]
    pub json: bool,
}
