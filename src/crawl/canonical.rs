// src/crawl/canonical.rs
// =============================================================================
// This module turns raw links into canonical URLs.
//
// A canonical URL is the identity of a page during a crawl. Two links point
// at the same page exactly when their canonical strings are equal, so every
// dedup and scope check in the crawler goes through here.
//
// Canonical form:
// - scheme is http or https (anything else is rejected)
// - host is lower-cased, default ports (:80 / :443) are dropped
// - runs of '/' in the path collapse to one, the path always starts with '/'
// - no fragment, no user-info
// - the query string is kept exactly as written in the link
//
// Relative resolution (./a, ../a, //host/a, ?q, #frag) is done by the `url`
// crate, which follows the WHATWG URL Standard the way browsers do. The url
// crate percent-encodes some query characters (' " space), so the query is
// taken from the raw link text instead of from the parsed Url.
//
// Rust concepts:
// - Newtypes: CanonicalUrl wraps a String so only this module can mint one
// - Option<T>: "not a crawlable link" is an expected answer, not an error
// =============================================================================

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::error::CrawlError;

/// A normalized absolute http(s) URL.
///
/// Equality, hashing and ordering all follow the string form, so sorting a
/// list of these sorts it lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves a link found on this page.
    pub fn join(&self, reference: &str) -> Option<CanonicalUrl> {
        normalize(&self.0, reference)
    }

    /// The scope key of this URL: lower-cased host plus any non-default
    /// port.
    pub fn root_host(&self) -> String {
        Url::parse(&self.0)
            .map(|url| scope_key(&url))
            .unwrap_or_default()
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Resolves `reference` against `base` and canonicalizes the result
//
// Returns None for anything we don't crawl: empty hrefs, non-http(s)
// schemes (mailto:, javascript:, data:, ftp:, ...) and unparseable input.
//
// Examples:
//   normalize("https://example.com/blog/", "about#team")
//     -> Some("https://example.com/blog/about")
//   normalize("http://a.com/", "http://a.com:80//x//y")
//     -> Some("http://a.com/x/y")
//   normalize("https://example.com/", "/s?q=it's") -> Some("https://example.com/s?q=it's")
//   normalize("https://example.com/", "mailto:x@y.com") -> None
pub fn normalize(base: &str, reference: &str) -> Option<CanonicalUrl> {
    if reference.is_empty() {
        return None;
    }

    // An unparseable base can still be paired with an absolute reference
    let (resolved, base_query) = match Url::parse(base) {
        Ok(parsed) => (parsed.join(reference).ok()?, raw_query(base)),
        Err(_) => (Url::parse(reference).ok()?, None),
    };

    // A reference without its own query only keeps one when it is a bare
    // fragment, and then the query is the base's
    let query = match raw_query(reference) {
        Some(query) => Some(query),
        None if resolved.query().is_some() => base_query,
        None => None,
    };

    canonicalize(resolved, query)
}

/// Canonicalizes the seed URL of a crawl.
///
/// Unlike [`normalize`], a rejection here is an error: a crawl cannot start
/// from a URL it cannot identify.
pub fn canonicalize_start(url: &str) -> Result<CanonicalUrl, CrawlError> {
    normalize(url, url).ok_or_else(|| CrawlError::InvalidStartUrl {
        url: url.to_string(),
    })
}

// Checks whether `url` lives on the crawl's root host
//
// Exact match only: "sub.example.com" is NOT in scope for "example.com".
// Malformed URLs are simply out of scope.
pub fn same_root(url: &str, root_host: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => scope_key(&parsed).eq_ignore_ascii_case(root_host),
        Err(_) => false,
    }
}

fn canonicalize(mut url: Url, query: Option<String>) -> Option<CanonicalUrl> {
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    // http(s) URLs always have a host, so clearing these cannot fail
    url.set_username("").ok()?;
    url.set_password(None).ok()?;
    url.set_fragment(None);
    url.set_query(None);

    // The url crate already lower-cases the host and drops default ports;
    // doubled slashes are the part it leaves alone
    let path = collapse_slashes(url.path());
    url.set_path(&path);

    let mut canonical = String::from(url);
    if let Some(query) = query {
        canonical.push('?');
        canonical.push_str(&query);
    }

    Some(CanonicalUrl(canonical))
}

// The query text of a URL or link as written: between the first '?' and
// the fragment. Surrounding whitespace and embedded tabs/newlines are
// removed the same way the URL parser removes them.
fn raw_query(input: &str) -> Option<String> {
    let input = input.trim_matches(|c: char| c <= ' ');
    let without_fragment = match input.split_once('#') {
        Some((before, _)) => before,
        None => input,
    };
    let (_, query) = without_fragment.split_once('?')?;

    Some(
        query
            .chars()
            .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
            .collect(),
    )
}

fn scope_key(url: &Url) -> String {
    let host = url.host_str().unwrap_or("").to_ascii_lowercase();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    }
}

fn collapse_slashes(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        collapsed.push('/');
    }
    for ch in path.chars() {
        if ch == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(ch);
    }
    collapsed
}
