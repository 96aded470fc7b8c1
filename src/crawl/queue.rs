// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl itself: a breadth-first walk over one
// host.
//
// How it works:
// 1. Start with the canonical start URL in a queue at depth 0
// 2. Pop the front of the queue; skip it if it was already visited
// 3. Fetch the page. Anything but a 200 text/html page is recorded with no
//    links and not expanded
// 4. Canonicalize every href against the page URL, keep the ones on the
//    root host, dedup, sort, and record them
// 5. Queue the unvisited links one level deeper, if that level is allowed
// 6. Repeat until the queue is empty or max_pages pages have been started
//
// Limits:
// - max_pages counts pages taken off the queue and processed. It is checked
//   at the top of the loop, and skipped revisits don't count
// - max_depth is a hop count. Links found at max_depth are still reported,
//   they just aren't queued
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - Generics: Crawler<F> works with any Fetcher
// =============================================================================

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, info};

use super::canonical::{canonicalize_start, same_root, CanonicalUrl};
use crate::error::CrawlError;
use crate::page::{extract_hrefs, Fetcher};

/// Default cap on processed pages.
pub const DEFAULT_MAX_PAGES: usize = 500;

/// Default cap on link hops from the start page.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Crawl limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrawlConfig {
    pub max_pages: usize,
    pub max_depth: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// One processed page and the in-scope links found on it.
///
/// `links` is sorted ascending with no repeats, and empty when the page
/// couldn't be fetched or wasn't HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitRecord {
    pub url: CanonicalUrl,
    pub links: Vec<CanonicalUrl>,
}

// Represents a page in the crawl queue
#[derive(Debug, Clone)]
struct FrontierEntry {
    url: CanonicalUrl,
    depth: usize, // Hops from the start URL (start = 0)
}

/// A single-host breadth-first crawler.
#[derive(Debug)]
pub struct Crawler<F> {
    start: CanonicalUrl,
    root_host: String,
    fetcher: F,
    config: CrawlConfig,
}

impl<F: Fetcher> Crawler<F> {
    /// Sets up a crawl from `start_url`.
    ///
    /// Fails with [`CrawlError::InvalidStartUrl`] if the start URL cannot be
    /// canonicalized; nothing is fetched in that case.
    pub fn new(start_url: &str, fetcher: F, config: CrawlConfig) -> Result<Self, CrawlError> {
        let start = canonicalize_start(start_url)?;
        let root_host = start.root_host();

        Ok(Self {
            start,
            root_host,
            fetcher,
            config,
        })
    }

    pub fn start(&self) -> &CanonicalUrl {
        &self.start
    }

    pub fn root_host(&self) -> &str {
        &self.root_host
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Runs the crawl and returns one record per processed page, in visit
    /// order.
    ///
    /// Queue and visited set live only for this call, so running twice
    /// starts from scratch both times.
    pub async fn run(&self) -> Vec<VisitRecord> {
        info!(
            start = %self.start,
            root_host = %self.root_host,
            max_pages = self.config.max_pages,
            max_depth = self.config.max_depth,
            "starting crawl"
        );

        let mut frontier = VecDeque::new();
        frontier.push_back(FrontierEntry {
            url: self.start.clone(),
            depth: 0,
        });

        let mut visited: HashSet<CanonicalUrl> = HashSet::new();
        let mut results = Vec::new();

        while visited.len() < self.config.max_pages {
            let Some(entry) = frontier.pop_front() else {
                break;
            };

            // Queued twice from two pages before either copy was processed
            if !visited.insert(entry.url.clone()) {
                debug!(url = %entry.url, "already visited, skipping");
                continue;
            }

            debug!(url = %entry.url, depth = entry.depth, "visiting");

            let response = self.fetcher.fetch(entry.url.as_str()).await;
            if !response.is_html() {
                debug!(
                    url = %entry.url,
                    status = response.status,
                    content_type = %response.content_type,
                    "not an HTML page, not expanding"
                );
                results.push(VisitRecord {
                    url: entry.url,
                    links: Vec::new(),
                });
                continue;
            }

            let mut links = self.in_scope_links(&entry.url, &response.body);
            links.sort();

            // depth < max_depth is depth + 1 <= max_depth without overflow
            if entry.depth < self.config.max_depth {
                for link in &links {
                    if !visited.contains(link) {
                        frontier.push_back(FrontierEntry {
                            url: link.clone(),
                            depth: entry.depth + 1,
                        });
                    }
                }
            }

            results.push(VisitRecord {
                url: entry.url,
                links,
            });
        }

        info!(
            visited = results.len(),
            queued = frontier.len(),
            "crawl finished"
        );

        results
    }

    // Canonical links on the root host, deduped in first-seen order
    fn in_scope_links(&self, page: &CanonicalUrl, html: &str) -> Vec<CanonicalUrl> {
        let mut seen = HashSet::new();
        let mut links = Vec::new();

        for href in extract_hrefs(html) {
            let Some(link) = page.join(&href) else {
                continue;
            };
            if !same_root(link.as_str(), &self.root_host) {
                continue;
            }
            if seen.insert(link.clone()) {
                links.push(link);
            }
        }

        links
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why sort the links before queueing them?
//    - Anchor order in HTML is arbitrary
//    - Sorted links give the same report and the same visit order every run
//
// 2. Why can the queue grow past max_pages?
//    - max_pages limits work done, not memory held
//    - A page with 1000 links queues 1000 entries even if we stop after 5
//
// 3. Why are revisits possible at all?
//    - We only check "visited" when queueing, and a URL is only marked
//      visited when it's popped
//    - So /a and /b can both queue /c before /c is processed
//    - The check at pop time catches the second copy
// -----------------------------------------------------------------------------
