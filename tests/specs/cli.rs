// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for commands, flags and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;
use yare::parameterized;

// =============================================================================
// COMMANDS
// =============================================================================

/// > sitelint (bare invocation) shows help
#[test]
fn bare_invocation_shows_help() {
    sitelint_cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"));
}

/// > Exit code 0 when invoked with --help
#[test]
fn help_exits_successfully() {
    sitelint_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("sitelint"));
}

/// > -V shows version
#[test]
fn short_version_flag_works() {
    sitelint_cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

/// > check help lists every check toggle
#[test]
fn check_help_lists_toggles() {
    sitelint_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicates::str::contains("--no-links"))
        .stdout(predicates::str::contains("--keep-going"));
}

/// > Exit code 2 for unknown commands
#[test]
fn unknown_command_fails() {
    sitelint_cmd()
        .arg("unknown")
        .assert()
        .code(2)
        .stderr(predicates::str::is_match(r"(?i)(unrecognized|unknown)").unwrap());
}

/// > Unknown flags to check command produce error
#[test]
fn check_unknown_flag_fails() {
    sitelint_cmd()
        .args(["check", "--unknown-option"])
        .assert()
        .code(2)
        .stderr(predicates::str::is_match(r"(?i)(unexpected|unknown|unrecognized)").unwrap());
}

// =============================================================================
// SITE ROOT
// =============================================================================

/// > PATH argument selects the site root
#[test]
fn path_argument_selects_root() {
    let elsewhere = Project::empty();
    sitelint_cmd()
        .args(["check", fixture("site").to_str().unwrap()])
        .current_dir(elsewhere.path())
        .assert()
        .success();
}

/// > A PATH that is not a directory is an argument error
#[test]
fn missing_root_exits_2() {
    let temp = Project::empty();
    sitelint_cmd()
        .args(["check", "does-not-exist"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("not a directory"));
}

// =============================================================================
// EXIT CODES
// =============================================================================

#[parameterized(
    valid_site = { "site", 0 },
    broken_links = { "broken-links", 1 },
    no_html = { "no-html", 1 },
    loose_dist = { "loose-dist", 0 },
)]
fn exit_code_reflects_result(fixture_name: &str, code: i32) {
    cli().on(fixture_name).exits(code);
}

// =============================================================================
// CHECK TOGGLES
// =============================================================================

/// > --<check> runs only that check
#[test]
fn enable_flag_runs_only_named_check() {
    let json = cli().on("broken-links").args(&["--entry"]).json().passes();
    assert_eq!(check_names(json.value()), vec!["entry"]);
}

/// > --no-<check> skips that check
#[test]
fn disable_flag_skips_named_check() {
    let json = cli().on("broken-links").args(&["--no-links"]).json().passes();
    assert_eq!(check_names(json.value()), vec!["files", "entry"]);
}

/// > Checks always report in canonical order
#[test]
fn checks_report_in_canonical_order() {
    let json = cli()
        .on("site")
        .args(&["--links", "--files", "--entry"])
        .json()
        .passes();
    assert_eq!(check_names(json.value()), vec!["files", "entry", "links"]);
}

// =============================================================================
// FAIL FAST / LIMITS
// =============================================================================

/// > By default each check stops at its first violation
#[test]
fn default_reports_first_violation_only() {
    let links = check("links").on("broken-links").json().fails();
    assert_eq!(links.violations().len(), 1);
}

/// > --keep-going reports every violation
#[test]
fn keep_going_reports_every_violation() {
    let links = check("links")
        .on("broken-links")
        .args(&["--keep-going"])
        .json()
        .fails();
    assert_eq!(links.violations().len(), 3);
}

/// > --limit truncates text output, not the result
#[test]
fn limit_truncates_text_output() {
    check("links")
        .on("broken-links")
        .args(&["--keep-going", "--limit", "1"])
        .fails()
        .stdout_has("Stopped after 1 violations. Use --no-limit to see all.")
        .stdout_lacks("contact");
}

/// > --no-limit shows every violation
#[test]
fn no_limit_shows_all() {
    check("links")
        .on("broken-links")
        .args(&["--keep-going", "--limit", "1", "--no-limit"])
        .fails()
        .stdout_has("contact")
        .stdout_lacks("Stopped after");
}

/// > --max-depth limits how deep discovery descends
#[test]
fn max_depth_limits_discovery() {
    let temp = Project::empty();
    temp.file("a/b/c/page.html", GOOD_INDEX);

    check("files").pwd(temp.path()).passes();
    check("files")
        .pwd(temp.path())
        .args(&["--max-depth", "2"])
        .fails();
}
