// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential check runner with error recovery.
//!
//! Runs checks one after another, isolating panics so one check failure
//! doesn't prevent other checks from running.

use std::path::Path;
use std::sync::Arc;

use crate::check::{Check, CheckContext, CheckResult};
use crate::config::Config;
use crate::walker::HtmlFile;

/// Configuration for the check runner.
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    /// Stop each check at its first violation.
    pub fail_fast: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

impl RunnerConfig {
    /// Build a CheckContext from this configuration.
    fn build_context<'a>(
        &self,
        root: &'a Path,
        files: &'a [HtmlFile],
        config: &'a Config,
    ) -> CheckContext<'a> {
        CheckContext {
            root,
            files,
            config,
            fail_fast: self.fail_fast,
        }
    }
}

/// The check runner executes checks in canonical order.
pub struct CheckRunner {
    config: RunnerConfig,
}

impl CheckRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run all provided checks and return results.
    ///
    /// Checks turned off in config are left out of the results. A check
    /// that panics is reported as skipped; the remaining checks still run.
    pub fn run(
        &self,
        checks: Vec<Arc<dyn Check>>,
        files: &[HtmlFile],
        config: &Config,
        root: &Path,
    ) -> Vec<CheckResult> {
        let ctx = self.config.build_context(root, files, config);

        let mut results: Vec<CheckResult> = checks
            .into_iter()
            .filter(|check| {
                let enabled = config.is_enabled(check.name());
                if !enabled {
                    tracing::debug!("{}: disabled by config", check.name());
                }
                enabled
            })
            .map(|check| {
                tracing::debug!("{}: {}", check.name(), check.description());
                match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| check.run(&ctx))) {
                    Ok(result) => result,
                    Err(_) => {
                        tracing::warn!("{}: check panicked", check.name());
                        CheckResult::skipped(check.name(), "internal error: check panicked")
                    }
                }
            })
            .collect();

        // Sort results by canonical check order for consistent output
        results.sort_by_key(|r| {
            crate::checks::CHECK_NAMES
                .iter()
                .position(|&n| n == r.name)
                .unwrap_or(usize::MAX)
        });

        results
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
