// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed HTML documents.
//!
//! Thin wrapper over `scraper` exposing the lookups the checks need:
//! element search by tag name, attribute lookup and text extraction.

use std::path::Path;

use scraper::{ElementRef, Html, Selector};

/// Read a page as text.
///
/// Bytes that are not valid UTF-8 (Latin-1 and other legacy encodings)
/// become U+FFFD, so such pages are still checked.
pub fn read_source(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// A parsed HTML document together with its source text.
pub struct HtmlDocument {
    source: String,
    html: Html,
}

impl HtmlDocument {
    /// Parse a document. Parsing never fails; malformed markup is repaired
    /// the way browsers do it.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let html = Html::parse_document(&source);
        Self { source, html }
    }

    /// Unparsed document text.
    pub fn source(&self) -> &str {
        &self.source
    }

    fn select(&self, tag: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(tag) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(err) => {
                tracing::warn!("invalid selector {:?}: {}", tag, err);
                Vec::new()
            }
        }
    }

    /// Whether at least one element with this tag name exists.
    pub fn has_element(&self, tag: &str) -> bool {
        !self.select(tag).is_empty()
    }

    /// Text content of the first `<title>`, or None when there is no title.
    pub fn title(&self) -> Option<String> {
        self.select("title").first().map(element_text)
    }

    /// Text content of `<body>` (empty when the body has no text).
    pub fn body_text(&self) -> String {
        self.select("body")
            .first()
            .map(element_text)
            .unwrap_or_default()
    }

    /// `href` values of every `<a>` that carries one, in document order.
    pub fn anchor_hrefs(&self) -> Vec<String> {
        self.select("a[href]")
            .into_iter()
            .filter_map(|a| a.value().attr("href").map(String::from))
            .collect()
    }
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
