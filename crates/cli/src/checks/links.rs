// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relative link validation.
//!
//! Every `<a href>` that points inside the site must resolve to an existing
//! file or directory, either next to the referencing file or under the root.

use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::check::{Check, CheckContext, CheckResult, Violation, ViolationKind};
use crate::html::{HtmlDocument, read_source};
use crate::walker::{HTML_SUFFIX, HtmlFile};

/// Prefixes of hrefs that never point at a site file.
const SKIPPED_PREFIXES: &[&str] = &["#", "mailto:", "tel:", "javascript:"];

/// Why an href was not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fragment-only, `mailto:`, `tel:` or `javascript:`.
    NonNavigational,
    /// Has a scheme (`://`) or is protocol-relative (`//`).
    External,
    /// Nothing left after removing fragment and query.
    Empty,
    /// Points at a non-HTML asset (`style.css`, `page.htm`).
    Asset,
}

/// Classification of a single href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HrefClass {
    Skip(SkipReason),
    /// Must resolve; carries the cleaned href.
    Check(String),
}

/// A hyperlink reference found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Href {
    /// Referencing file, relative to the root.
    pub source: String,
    /// Attribute value, whitespace-trimmed.
    pub raw: String,
    pub class: HrefClass,
}

impl Href {
    pub fn new(source: &str, raw: &str) -> Self {
        let raw = raw.trim();
        Self {
            source: source.to_string(),
            raw: raw.to_string(),
            class: classify_href(raw),
        }
    }
}

/// Decide whether `href` must resolve, and to what.
pub fn classify_href(href: &str) -> HrefClass {
    let href = href.trim();
    if SKIPPED_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return HrefClass::Skip(SkipReason::NonNavigational);
    }
    if href.contains("://") || href.starts_with("//") {
        return HrefClass::Skip(SkipReason::External);
    }

    let cleaned = normalize_href(href);
    if cleaned.is_empty() {
        return HrefClass::Skip(SkipReason::Empty);
    }
    if is_asset(cleaned) {
        return HrefClass::Skip(SkipReason::Asset);
    }
    HrefClass::Check(cleaned.to_string())
}

/// Cut fragment and query, then drop one leading `./`.
pub fn normalize_href(href: &str) -> &str {
    let href = href.split('#').next().unwrap_or(href);
    let href = href.split('?').next().unwrap_or(href);
    href.strip_prefix("./").unwrap_or(href)
}

/// Last segment has an extension other than `.html`.
fn is_asset(cleaned: &str) -> bool {
    let basename = cleaned.rsplit('/').next().unwrap_or(cleaned);
    basename.contains('.') && !cleaned.ends_with(HTML_SUFFIX)
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` never climbs above a root or prefix component.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Candidate targets for `cleaned`: beside the file first, then under the root.
///
/// A leading `/` is dropped so root-absolute links stay inside the site.
pub fn resolve_candidates(root: &Path, file_dir: &Path, cleaned: &str) -> [PathBuf; 2] {
    let relative = cleaned.trim_start_matches('/');
    [
        normalize_path(&file_dir.join(relative)),
        normalize_path(&root.join(relative)),
    ]
}

/// Whether any candidate for `cleaned` exists.
pub fn link_resolves(root: &Path, file_dir: &Path, cleaned: &str) -> bool {
    resolve_candidates(root, file_dir, cleaned)
        .iter()
        .any(|candidate| candidate.exists())
}

/// Validate every anchor in one document.
///
/// Violations name the file relative to the root and the trimmed href.
pub fn validate_file_links(
    root: &Path,
    file: &HtmlFile,
    content: &str,
    fail_fast: bool,
) -> Vec<Violation> {
    let doc = HtmlDocument::parse(content);
    let mut violations = Vec::new();

    for href in doc.anchor_hrefs().iter().map(|raw| Href::new(&file.relative, raw)) {
        let HrefClass::Check(cleaned) = &href.class else {
            tracing::trace!("{}: skip {:?} ({:?})", href.source, href.raw, href.class);
            continue;
        };
        if link_resolves(root, file.dir(), cleaned) {
            tracing::trace!("{}: ok {:?}", href.source, href.raw);
            continue;
        }

        violations.push(
            Violation::file(
                &file.relative,
                ViolationKind::BrokenLink,
                "Linked file does not exist. Update the link or create the file.",
            )
            .with_target(href.raw),
        );
        if fail_fast {
            break;
        }
    }
    violations
}

/// Build a GlobSet from patterns.
fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(err) => tracing::warn!("invalid links exclude pattern {:?}: {}", pattern, err),
        }
    }
    builder.build().unwrap_or_else(|err| {
        tracing::warn!("links exclude patterns ignored: {}", err);
        GlobSet::empty()
    })
}

pub struct LinksCheck;

impl Check for LinksCheck {
    fn name(&self) -> &'static str {
        "links"
    }

    fn description(&self) -> &'static str {
        "Relative link resolution"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        let exclude_set = build_glob_set(&ctx.config.check.links.exclude);
        let mut violations = Vec::new();

        for file in ctx.files {
            if exclude_set.is_match(&file.relative) {
                tracing::debug!("links: excluded {}", file.relative);
                continue;
            }

            match read_source(&file.path) {
                Ok(content) => {
                    violations.extend(validate_file_links(ctx.root, file, &content, ctx.fail_fast));
                }
                Err(e) => {
                    tracing::warn!("links: cannot read {}: {}", file.relative, e);
                    violations.push(Violation::unreadable(&file.relative, &e));
                }
            }
            if ctx.fail_fast && !violations.is_empty() {
                break;
            }
        }

        CheckResult::from_violations(self.name(), violations)
    }
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
