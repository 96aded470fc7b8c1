// src/page/mod.rs
// =============================================================================
// This module holds the crawler's two outside capabilities:
// - getting a page (the Fetcher trait, with a real HTTP client and an
//   in-memory stand-in for tests)
// - pulling raw href values out of HTML
//
// The crawl engine only talks to these through the names re-exported here.
//
// Rust concepts:
// - Traits: an interface the crawler is generic over
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod fetch;
mod html;
mod http;
mod memory;

// Re-export public items from submodules
// This lets users write `page::HttpFetcher` instead of
// `page::http::HttpFetcher`
pub use fetch::{FetchResponse, Fetcher};
pub use html::extract_hrefs;
pub use http::{HttpFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use memory::MemoryFetcher;
