// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check result types for output formatting.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::walker::HtmlFile;

/// Context passed to all checks during execution.
pub struct CheckContext<'a> {
    /// Site root directory.
    pub root: &'a Path,
    /// HTML files discovered under the root.
    pub files: &'a [HtmlFile],
    /// Parsed configuration.
    pub config: &'a Config,
    /// Stop each check at its first violation.
    pub fail_fast: bool,
}

/// The Check trait defines a single site check.
///
/// Object-safe to allow dynamic dispatch via `Arc<dyn Check>`.
pub trait Check: Send + Sync {
    /// Unique identifier for this check (e.g., "files", "links").
    fn name(&self) -> &'static str;

    /// Human-readable description, logged when the check starts.
    fn description(&self) -> &'static str;

    /// Run the check and return results.
    ///
    /// Implementations should:
    /// - Return `CheckResult::skipped()` if prerequisites are missing
    /// - Stop at the first violation when `ctx.fail_fast` is set
    /// - Handle errors gracefully without panicking
    fn run(&self, ctx: &CheckContext) -> CheckResult;
}

/// Kind of violated expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// No `.html` files anywhere under the root.
    NoHtmlFiles,
    /// The entry document does not exist.
    MissingEntryFile,
    /// `<title>` missing or blank.
    EmptyTitle,
    /// No `<h1>` in the document.
    MissingHeading,
    /// Opening or closing `<html>` tag missing.
    MissingHtmlTag,
    /// Body text too short to count as content.
    InsufficientContent,
    /// Relative link resolves to nothing.
    BrokenLink,
    /// A page exists but could not be read.
    UnreadableFile,
}

impl ViolationKind {
    /// Short description used in text output.
    pub fn describe(self) -> &'static str {
        match self {
            ViolationKind::NoHtmlFiles => "no html files",
            ViolationKind::MissingEntryFile => "missing entry file",
            ViolationKind::EmptyTitle => "empty title",
            ViolationKind::MissingHeading => "missing heading",
            ViolationKind::MissingHtmlTag => "missing html tag",
            ViolationKind::InsufficientContent => "insufficient content",
            ViolationKind::BrokenLink => "broken link",
            ViolationKind::UnreadableFile => "unreadable file",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A single violation within a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// File path relative to the root (None for site-wide violations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Violation category.
    #[serde(rename = "type")]
    pub kind: ViolationKind,

    /// Actionable guidance on how to fix.
    pub advice: String,

    /// Offending reference (original href, missing path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Current value (for threshold violations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,

    /// Threshold that was not met.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
}

impl Violation {
    /// Create a violation that is not tied to a file.
    pub fn site(kind: ViolationKind, advice: impl Into<String>) -> Self {
        Self {
            file: None,
            kind,
            advice: advice.into(),
            target: None,
            value: None,
            threshold: None,
        }
    }

    /// Create a file-based violation.
    pub fn file(file: impl Into<PathBuf>, kind: ViolationKind, advice: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::site(kind, advice)
        }
    }

    /// Add value/threshold context to the violation.
    pub fn with_threshold(mut self, value: i64, threshold: i64) -> Self {
        self.value = Some(value);
        self.threshold = Some(threshold);
        self
    }

    /// A page that could not be read.
    pub fn unreadable(file: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::file(
            file,
            ViolationKind::UnreadableFile,
            "Page could not be read. Check its permissions.",
        )
        .with_target(err.to_string())
    }

    /// Add the offending reference.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// One-line description, e.g. `broken link: ./missing.html`.
    pub fn description(&self) -> String {
        match (&self.target, self.value, self.threshold) {
            (Some(target), _, _) => format!("{}: {}", self.kind, target),
            (None, Some(value), Some(threshold)) => {
                format!("{} ({} vs {})", self.kind, value, threshold)
            }
            _ => self.kind.to_string(),
        }
    }
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check identifier (e.g., "files", "entry").
    pub name: String,

    /// Whether this check passed.
    pub passed: bool,

    /// True if check was skipped due to an error.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,

    /// Error message if check was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// List of violations (omitted if empty).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            skipped: false,
            error: None,
            violations: Vec::new(),
        }
    }

    /// Create a failing check result with violations.
    pub fn failed(name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            skipped: false,
            error: None,
            violations,
        }
    }

    /// Create a skipped check result with an error.
    pub fn skipped(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            skipped: true,
            error: Some(error.into()),
            violations: Vec::new(),
        }
    }

    /// Passed when there are no violations, failed otherwise.
    pub fn from_violations(name: impl Into<String>, violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::passed(name)
        } else {
            Self::failed(name, violations)
        }
    }
}

/// Aggregated results from all checks.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// Whether all checks passed.
    pub passed: bool,

    /// Results for each check.
    pub checks: Vec<CheckResult>,
}

impl CheckOutput {
    /// Create output from check results.
    pub fn new(timestamp: String, checks: Vec<CheckResult>) -> Self {
        // A skipped check was never evaluated, so it cannot pass the run
        let passed = checks.iter().all(|c| c.passed);
        Self {
            timestamp,
            passed,
            checks,
        }
    }

    /// Count total violations across all checks.
    pub fn total_violations(&self) -> usize {
        self.checks.iter().map(|c| c.violations.len()).sum()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
