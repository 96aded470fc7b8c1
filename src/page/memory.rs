// src/page/memory.rs
// =============================================================================
// An in-memory Fetcher: a fixed URL -> response table.
//
// Used to run whole crawls in tests without a network. It also remembers
// every URL it was asked for, so a test can check that an off-site link was
// never fetched.
// =============================================================================

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::fetch::{FetchResponse, Fetcher};

/// Serves canned responses; unknown URLs get a 404.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    responses: HashMap<String, FetchResponse>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an HTML page served with status 200.
    pub fn page(self, url: &str, html: &str) -> Self {
        self.response(url, FetchResponse::new(200, html, "text/html; charset=utf-8"))
    }

    /// Registers an arbitrary response.
    pub fn response(mut self, url: &str, response: FetchResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Every URL fetched so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Fetcher for MemoryFetcher {
    async fn fetch(&self, url: &str) -> FetchResponse {
        match self.requests.lock() {
            Ok(mut requests) => requests.push(url.to_string()),
            Err(poisoned) => poisoned.into_inner().push(url.to_string()),
        }

        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| FetchResponse::new(404, "", "text/html"))
    }
}
