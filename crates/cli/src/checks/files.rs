// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML file discovery check.

use crate::check::{Check, CheckContext, CheckResult, Violation, ViolationKind};
use crate::walker::HtmlFile;

/// Fails when no HTML file was found under the root.
pub fn validate_files(files: &[HtmlFile]) -> Option<Violation> {
    if files.is_empty() {
        return Some(Violation::site(
            ViolationKind::NoHtmlFiles,
            "No .html files found in repo root or subfolders. \
             Check the site root or add the site's pages.",
        ));
    }
    None
}

pub struct FilesCheck;

impl Check for FilesCheck {
    fn name(&self) -> &'static str {
        "files"
    }

    fn description(&self) -> &'static str {
        "HTML file discovery"
    }

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        tracing::debug!("files: {} html files under {}", ctx.files.len(), ctx.root.display());
        let violations = validate_files(ctx.files).into_iter().collect();
        CheckResult::from_violations(self.name(), violations)
    }
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
