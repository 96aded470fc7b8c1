//! Single-host site mapper.
//!
//! Crawls one host breadth-first from a start URL and reports, for every
//! page it visits, the sorted set of links on that page that stay on the
//! same host.
//!
//! ```rust,ignore
//! use site_mapper::{CrawlConfig, Crawler, HttpFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
//!
//! let fetcher = HttpFetcher::new(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)?;
//! let crawler = Crawler::new("https://example.com/", fetcher, CrawlConfig::default())?;
//! for record in crawler.run().await {
//!     println!("{} -> {} links", record.url, record.links.len());
//! }
//! ```

pub mod crawl;
pub mod error;
pub mod logging;
pub mod page;

pub use crawl::{CanonicalUrl, CrawlConfig, Crawler, VisitRecord};
pub use error::CrawlError;
pub use page::{
    FetchResponse, Fetcher, HttpFetcher, MemoryFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
