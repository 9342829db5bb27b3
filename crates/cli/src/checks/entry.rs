// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entry document validation.
//!
//! Strict mode checks a fixed entry path for a non-empty `<title>` and an
//! `<h1>`. Loose mode picks the first existing candidate and additionally
//! requires `<html>`/`</html>` tags and some body text.

use std::path::{Path, PathBuf};

use aho_corasick::AhoCorasick;

use crate::check::{Check, CheckContext, CheckResult, Violation, ViolationKind};
use crate::config::{EntryConfig, EntryMode};
use crate::error::{Error, Result};
use crate::html::{HtmlDocument, read_source};

/// Tags the loose mode looks for, case-insensitively.
const HTML_TAGS: [&str; 2] = ["<html", "</html>"];

/// Locate the entry document under `root`.
///
/// Strict mode only considers `config.path`. Loose mode returns the first
/// of `config.candidates` that exists.
pub fn locate_entry(root: &Path, config: &EntryConfig) -> Option<PathBuf> {
    match config.mode {
        EntryMode::Strict => Some(root.join(&config.path)).filter(|p| p.is_file()),
        EntryMode::Loose => config
            .candidates
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|p| p.is_file()),
    }
}

fn missing_entry(config: &EntryConfig) -> Violation {
    match config.mode {
        EntryMode::Strict => Violation::file(
            &config.path,
            ViolationKind::MissingEntryFile,
            format!("{} not found at repo root. Create it.", config.path),
        ),
        EntryMode::Loose => Violation::site(
            ViolationKind::MissingEntryFile,
            "No entry document found. Create one of the candidate paths.",
        )
        .with_target(config.candidates.join(", ")),
    }
}

/// `<title>` must exist with non-blank text.
pub fn validate_title(doc: &HtmlDocument, file: &str) -> Option<Violation> {
    let title = doc.title().unwrap_or_default();
    if title.trim().is_empty() {
        return Some(Violation::file(
            file,
            ViolationKind::EmptyTitle,
            format!("{} has empty or missing <title>. Give the page a title.", file),
        ));
    }
    None
}

/// At least one `<h1>` must exist.
pub fn validate_heading(doc: &HtmlDocument, file: &str) -> Option<Violation> {
    if !doc.has_element("h1") {
        return Some(Violation::file(
            file,
            ViolationKind::MissingHeading,
            format!("{} missing <h1> element. Add a top-level heading.", file),
        ));
    }
    None
}

/// Source must contain both an opening and a closing `html` tag.
pub fn validate_html_tags(doc: &HtmlDocument, file: &str) -> Result<Option<Violation>> {
    let matcher = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(HTML_TAGS)
        .map_err(|e| Error::Internal(format!("aho-corasick error: {}", e)))?;

    let mut seen = [false; HTML_TAGS.len()];
    for m in matcher.find_iter(doc.source()) {
        seen[m.pattern().as_usize()] = true;
    }

    if seen.iter().all(|&s| s) {
        return Ok(None);
    }
    Ok(Some(
        Violation::file(
            file,
            ViolationKind::MissingHtmlTag,
            "Document must contain both <html> and </html>.",
        )
        .with_target(if seen[0] { "</html>" } else { "<html>" }),
    ))
}

/// Trimmed body text must be longer than `min_chars` characters.
pub fn validate_body_content(doc: &HtmlDocument, file: &str, min_chars: usize) -> Option<Violation> {
    let length = doc.body_text().trim().chars().count();
    if length > min_chars {
        return None;
    }
    Some(
        Violation::file(
            file,
            ViolationKind::InsufficientContent,
            "Body has little or no text. Add real content to the page.",
        )
        .with_threshold(length as i64, min_chars as i64),
    )
}

/// Run every expectation for the configured mode, in order.
///
/// With `fail_fast` the first violation ends validation.
pub fn validate_entry(
    doc: &HtmlDocument,
    file: &str,
    config: &EntryConfig,
    fail_fast: bool,
) -> Result<Vec<Violation>> {
    let stop = |violations: &Vec<Violation>| fail_fast && !violations.is_empty();
    let mut violations = Vec::new();

    violations.extend(validate_title(doc, file));
    if stop(&violations) {
        return Ok(violations);
    }
    violations.extend(validate_heading(doc, file));

    if config.mode == EntryMode::Loose {
        if stop(&violations) {
            return Ok(violations);
        }
        violations.extend(validate_html_tags(doc, file)?);
        if stop(&violations) {
            return Ok(violations);
        }
        violations.extend(validate_body_content(doc, file, config.min_body_chars));
    }

    Ok(violations)
}

pub struct EntryCheck;

impl Check for EntryCheck {
    fn name(&self) -> &'static str {
        "entry"
    }

    fn description(&self) -> &'static str {
        "Entry document title and heading"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let config = &ctx.config.check.entry;

        let Some(path) = locate_entry(ctx.root, config) else {
            return CheckResult::failed(self.name(), vec![missing_entry(config)]);
        };
        let file = crate::walker::relative_posix(ctx.root, &path);
        tracing::debug!("entry: validating {} ({:?} mode)", file, config.mode);

        let content = match read_source(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("entry: cannot read {}: {}", file, e);
                return CheckResult::failed(self.name(), vec![Violation::unreadable(&file, &e)]);
            }
        };

        let doc = HtmlDocument::parse(content);
        match validate_entry(&doc, &file, config, ctx.fail_fast) {
            Ok(violations) => CheckResult::from_violations(self.name(), violations),
            Err(e) => CheckResult::skipped(self.name(), e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
