// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr)
// 3. Build the HTTP fetcher and the crawler, run the crawl
// 4. Print one block per visited page (text or JSON) on stdout
// 5. Exit with proper code (0 = crawl completed, 2 = error)
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use site_mapper::logging::init_logging;
use site_mapper::{CrawlConfig, Crawler, HttpFetcher, VisitRecord, DEFAULT_USER_AGENT};
use tracing::info;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    init_logging("info")?;

    let user_agent = cli.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout_secs), user_agent)
        .context("failed to build HTTP client")?;

    let config = CrawlConfig {
        max_pages: cli.max_pages.get(),
        max_depth: cli.max_depth,
    };
    let crawler = Crawler::new(&cli.start_url, fetcher, config)?;

    let results = crawler.run().await;
    info!(pages = results.len(), "crawled {}", crawler.root_host());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &results)?;
        writeln!(out)?;
    } else {
        write_text_report(&mut out, &results)?;
    }
    out.flush()?;

    Ok(())
}

// Prints the records in visit order:
//
//   VISITED https://example.com/
//   LINKS:
//     - https://example.com/a
//
//   VISITED https://example.com/a
//   LINKS: (none)
fn write_text_report<W: Write>(out: &mut W, results: &[VisitRecord]) -> io::Result<()> {
    for record in results {
        writeln!(out, "VISITED {}", record.url)?;
        if record.links.is_empty() {
            writeln!(out, "LINKS: (none)")?;
        } else {
            writeln!(out, "LINKS:")?;
            for link in &record.links {
                writeln!(out, "  - {}", link)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
