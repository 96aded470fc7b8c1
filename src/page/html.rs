// src/page/html.rs
// =============================================================================
// This module pulls raw href values out of HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), so broken markup still
//   parses the way a browser would parse it
//
// Nothing is filtered or resolved here. Relative links, mailto: links and
// empty hrefs all come back as written; deciding what is crawlable is the
// canonicalizer's job.
// =============================================================================

use scraper::{Html, Selector};

// Extracts the href of every <a href> element, in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='mailto:me@x.com'>Me</a>"
//   result = ["/docs", "mailto:me@x.com"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // The selector is a constant, so parsing it can only fail on a typo here
    let selector = Selector::parse("a[href]").expect("a[href] is a valid selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
