// src/page/http.rs
// =============================================================================
// The production Fetcher: real HTTP GET requests with reqwest.
//
// Key behavior:
// - One reqwest Client per fetcher (connection pooling across pages)
// - Redirects are followed by the client; the crawler only sees the final
//   response
// - Every failure (DNS, TLS, timeout, too many redirects, unreadable body)
//   becomes FetchResponse::failed(), logged as a warning
//
// Rust concepts:
// - async/await: the crawler awaits each fetch in turn
// - Traits: HttpFetcher implements the Fetcher trait
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use tracing::warn;

use super::fetch::{FetchResponse, Fetcher};

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("site-mapper/", env!("CARGO_PKG_VERSION"));

const MAX_REDIRECTS: usize = 10;

/// Fetches pages over the network.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the given per-request timeout and User-Agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }

    async fn try_fetch(&self, url: &str) -> Result<FetchResponse, reqwest::Error> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();

        // A header that isn't valid text is as good as no header
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response.text().await?;

        Ok(FetchResponse {
            status,
            body,
            content_type,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResponse {
        match self.try_fetch(url).await {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "fetch failed");
                FetchResponse::failed()
            }
        }
    }
}
