// src/logging.rs
// =============================================================================
// Sets up `tracing` output for the binary.
//
// Logs go to stderr so that stdout carries nothing but the crawl report
// (safe to pipe into a file or jq). The level comes from RUST_LOG, e.g.
//   RUST_LOG=debug site-mapper --start-url https://example.com/
//   RUST_LOG=site_mapper=debug,reqwest=warn site-mapper ...
// =============================================================================

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. `default_filter` applies when RUST_LOG is
/// unset or invalid.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}
