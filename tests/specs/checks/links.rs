// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the links check.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;
use yare::parameterized;

fn anchor(href: &str) -> String {
    format!("<html><body><a href=\"{href}\">link</a></body></html>")
}

/// > Passes when every relative link resolves
#[test]
fn links_pass_on_valid_site() {
    check("links").on("site").passes();
}

/// > Broken link names the file and the original href
#[test]
fn links_broken_link_reported() {
    let links = check("links").on("broken-links").json().fails();
    let violation = links.require_violation("broken_link");

    assert_eq!(violation["file"], "docs/page.html");
    assert_eq!(violation["target"], "../gone.html");
}

/// > Text output names the file and href
#[test]
fn links_text_output() {
    check("links")
        .on("broken-links")
        .fails()
        .stdout_has("links: FAIL")
        .stdout_has("docs/page.html: broken link: ../gone.html");
}

#[parameterized(
    fragment = { "#section" },
    mailto = { "mailto:someone@example.com" },
    tel = { "tel:+15550100" },
    javascript = { "javascript:void(0)" },
    external = { "https://example.com/missing.html" },
    protocol_relative = { "//cdn.example.com/missing.html" },
    query_only = { "?q=1" },
    stylesheet = { "missing.css" },
    htm = { "missing.htm" },
)]
fn links_skipped(href: &str) {
    let temp = Project::empty();
    temp.file("index.html", &anchor(href));

    check("links").pwd(temp.path()).passes();
}

#[parameterized(
    sibling = { "docs/page.html", "other.html", "docs/other.html" },
    parent = { "docs/page.html", "../top.html", "top.html" },
    root_absolute = { "docs/page.html", "/top.html", "top.html" },
    root_relative_fallback = { "docs/page.html", "top.html", "top.html" },
    dot_slash = { "index.html", "./top.html", "top.html" },
    query_and_fragment = { "index.html", "top.html?x=1#y", "top.html" },
    directory = { "index.html", "docs/", "docs/readme.txt" },
    extensionless_directory = { "index.html", "docs", "docs/readme.txt" },
    padded = { "index.html", "  top.html  ", "top.html" },
)]
fn links_resolve(source: &str, href: &str, target: &str) {
    let temp = Project::empty();
    temp.file(source, &anchor(href));
    temp.file(target, "");

    check("links").pwd(temp.path()).passes();
}

/// > Extensionless links are checked
#[test]
fn links_extensionless_missing_fails() {
    let temp = Project::empty();
    temp.file("index.html", &anchor("contact"));

    let links = check("links").pwd(temp.path()).json().fails();
    assert_eq!(links.require_violation("broken_link")["target"], "contact");
}

/// > Exclude patterns skip files
#[test]
fn links_exclude_patterns() {
    let temp = Project::empty();
    temp.config("[check.links]\nexclude = [\"drafts/**\"]\n");
    temp.file("drafts/wip.html", &anchor("todo.html"));

    check("links").pwd(temp.path()).passes();
}

/// > Fail-fast reports one broken link; --keep-going reports all
#[test]
fn links_keep_going() {
    let links = check("links")
        .on("broken-links")
        .args(&["--keep-going"])
        .json()
        .fails();

    let targets: Vec<_> = links
        .violations_of_type("broken_link")
        .iter()
        .map(|v| v["target"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(targets, vec!["../gone.html", "contact", "./missing.html#intro"]);
}

/// > Pages in a legacy encoding are still checked
#[test]
fn links_latin1_page_checked() {
    let temp = Project::empty();
    temp.bytes("caf.html", b"<p>Caf\xe9</p><a href=\"gone.html\">x</a>");

    let links = check("links").pwd(temp.path()).json().fails();
    assert_eq!(links.require_violation("broken_link")["file"], "caf.html");
}

/// > A parent link from the root leaves the site and is broken
#[test]
fn links_parent_of_root_is_broken() {
    let temp = Project::empty();
    temp.file("site/index.html", &anchor("../index.html"));

    let links = check("links").pwd(temp.path().join("site")).json().fails();
    assert_eq!(links.require_violation("broken_link")["target"], "../index.html");
}
