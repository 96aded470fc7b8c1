// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL
// - Stays on exactly one host (no subdomains, no other sites)
// - Page-count and depth limits
// - Canonical URLs, so the same page reached through different spellings
//   is visited once
//
// Submodules:
// - canonical: URL resolution, normalization and scope checks
// - queue: the crawl loop
// =============================================================================

pub mod canonical;
mod queue;

pub use canonical::{canonicalize_start, normalize, same_root, CanonicalUrl};
pub use queue::{CrawlConfig, Crawler, VisitRecord, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES};
