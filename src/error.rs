// src/error.rs
// =============================================================================
// Errors the library reports to its caller.
//
// Almost nothing in a crawl is an error: unreachable pages, non-HTML pages
// and malformed links are all handled locally. The only thing that stops a
// crawl before it starts is a seed URL we cannot canonicalize.
// =============================================================================

use thiserror::Error;

/// Errors raised by the crawl library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrawlError {
    /// The start URL is unparseable or not http/https.
    #[error("Invalid start URL: {url}")]
    InvalidStartUrl { url: String },
}
