// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check name suggestions for config validation.

use std::path::Path;

use crate::checks::CHECK_NAMES;

/// Suggest a check name for a typo.
pub fn suggest_check_name(unknown: &str) -> Option<&'static str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    let suggestion = match unknown {
        "file" | "html" | "pages" | "discovery" => Some("files"),
        "index" | "title" | "heading" | "structure" => Some("entry"),
        "link" | "href" | "hrefs" | "anchors" => Some("links"),
        _ => None,
    };

    if suggestion.is_some() {
        return suggestion;
    }

    // Try prefix matching (require at least 2 chars to avoid false positives)
    if unknown.len() >= 2 {
        for &name in CHECK_NAMES {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Warn about unknown check key with suggestion.
pub fn warn_unknown_check(path: &Path, key: &str) {
    match suggest_check_name(key) {
        Some(suggested) => eprintln!(
            "sitelint: warning: {}: unknown check `{}`. Did you mean `{}`?",
            path.display(),
            key,
            suggested
        ),
        None => eprintln!(
            "sitelint: warning: {}: unknown check `{}`\n  Valid checks: {}",
            path.display(),
            key,
            CHECK_NAMES.join(", ")
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
