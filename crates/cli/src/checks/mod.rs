// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check registry and discovery.
//!
//! Built-in checks, in canonical order:
//! - files: at least one `.html` file exists
//! - entry: entry document has a title and a heading
//! - links: relative links resolve to existing files

pub mod entry;
pub mod files;
pub mod links;

use std::sync::Arc;

use crate::check::Check;
use crate::cli::CheckFilter;

/// All registered check names in canonical order.
pub const CHECK_NAMES: &[&str] = &["files", "entry", "links"];

/// Create all registered checks.
pub fn all_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(files::FilesCheck),
        Arc::new(entry::EntryCheck),
        Arc::new(links::LinksCheck),
    ]
}

/// Select the checks a filter includes, in canonical order.
///
/// Semantics:
/// - No flags: run all checks
/// - `--<check>`: run ONLY specified checks
/// - `--no-<check>`: run all EXCEPT specified checks
pub fn filter_checks(filter: &impl CheckFilter) -> Vec<Arc<dyn Check>> {
    all_checks()
        .into_iter()
        .filter(|c| filter.should_include(c.name()))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
