// src/page/fetch.rs
// =============================================================================
// The fetch capability the crawler is built on.
//
// A fetch never fails from the crawler's point of view: transport errors
// come back as the "status 0, empty body, empty content-type" sentinel and
// are treated like any other page we cannot expand.
// =============================================================================

use async_trait::async_trait;

/// What a fetch produced for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
    pub content_type: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: content_type.into(),
        }
    }

    /// The sentinel for a fetch that never got a response.
    pub fn failed() -> Self {
        Self::new(0, "", "")
    }

    /// True when links should be extracted from this response: a 200 whose
    /// content-type mentions text/html (any casing).
    pub fn is_html(&self) -> bool {
        self.status == 200
            && !self.content_type.is_empty()
            && self.content_type.to_ascii_lowercase().contains("text/html")
    }
}

/// Maps a URL to a response.
///
/// Implementations must not return errors; map them to
/// [`FetchResponse::failed`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResponse;
}
