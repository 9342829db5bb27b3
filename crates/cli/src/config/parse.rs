// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use super::{CheckLevel, EntryConfig, EntryMode, FilesConfig, LinksConfig};

/// Known keys per check table.
const KNOWN_FILES_KEYS: &[&str] = &["check"];
const KNOWN_ENTRY_KEYS: &[&str] = &["check", "mode", "path", "candidates", "min_body_chars"];
const KNOWN_LINKS_KEYS: &[&str] = &["check", "exclude"];

/// Parse a TOML array of strings into a Vec<String>.
pub(super) fn parse_string_array(value: Option<&toml::Value>) -> Option<Vec<String>> {
    value?.as_array().map(|arr| {
        arr.iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect()
    })
}

/// Parse a TOML array of strings, returning empty vec if not found.
pub(super) fn parse_string_array_or_empty(value: Option<&toml::Value>) -> Vec<String> {
    parse_string_array(value).unwrap_or_default()
}

/// Parse a TOML string value with a default function.
fn parse_string_or_else<F>(value: Option<&toml::Value>, default: F) -> String
where
    F: FnOnce() -> String,
{
    value
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or_else(default)
}

/// Parse a TOML boolean, defaulting to false.
pub(super) fn parse_bool(value: Option<&toml::Value>) -> bool {
    value.and_then(|v| v.as_bool()).unwrap_or(false)
}

/// Parse a keyword value, warning and falling back to the default when it
/// is not one of `names`.
fn parse_keyword<T: Default>(
    value: Option<&toml::Value>,
    path: &Path,
    key: &str,
    names: &[&str],
    from_name: fn(&str) -> Option<T>,
) -> T {
    let Some(value) = value else {
        return T::default();
    };
    match value.as_str().and_then(from_name) {
        Some(parsed) => parsed,
        None => {
            warn_invalid_value(path, key, value, &format!("one of {}", names.join(", ")));
            T::default()
        }
    }
}

/// Parse check level from TOML value.
fn parse_check_level(value: Option<&toml::Value>, path: &Path, table: &str) -> CheckLevel {
    let key = format!("{}.check", table);
    parse_keyword(value, path, &key, CheckLevel::NAMES, CheckLevel::from_name)
}

/// Parse entry mode from TOML value.
fn parse_entry_mode(value: Option<&toml::Value>, path: &Path) -> EntryMode {
    parse_keyword(value, path, "check.entry.mode", EntryMode::NAMES, EntryMode::from_name)
}

/// Parse the body length threshold, which must be a non-negative integer.
fn parse_min_body_chars(value: Option<&toml::Value>, path: &Path) -> usize {
    let Some(value) = value else {
        return EntryConfig::DEFAULT_MIN_BODY_CHARS;
    };
    match value.as_integer().and_then(|v| usize::try_from(v).ok()) {
        Some(chars) => chars,
        None => {
            warn_invalid_value(
                path,
                "check.entry.min_body_chars",
                value,
                "a non-negative integer",
            );
            EntryConfig::DEFAULT_MIN_BODY_CHARS
        }
    }
}

/// Warn about keys of `table` that are not in `known`.
pub(super) fn warn_unknown_keys(path: &Path, prefix: &str, table: &toml::Table, known: &[&str]) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{}.{}", prefix, key));
        }
    }
}

/// Warn about unknown configuration key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "sitelint: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Warn about a value the config does not accept.
pub(super) fn warn_invalid_value(path: &Path, key: &str, value: &toml::Value, expected: &str) {
    eprintln!(
        "sitelint: warning: {}: invalid value {} for `{}`, expected {} (using default)",
        path.display(),
        value,
        key,
        expected
    );
}

/// Parse files check configuration from TOML value.
pub(super) fn parse_files_config(value: Option<&toml::Value>, path: &Path) -> FilesConfig {
    let Some(toml::Value::Table(t)) = value else {
        return FilesConfig::default();
    };
    warn_unknown_keys(path, "check.files", t, KNOWN_FILES_KEYS);

    FilesConfig {
        check: parse_check_level(t.get("check"), path, "check.files"),
    }
}

/// Parse entry check configuration from TOML value.
pub(super) fn parse_entry_config(value: Option<&toml::Value>, path: &Path) -> EntryConfig {
    let Some(toml::Value::Table(t)) = value else {
        return EntryConfig::default();
    };
    warn_unknown_keys(path, "check.entry", t, KNOWN_ENTRY_KEYS);

    EntryConfig {
        check: parse_check_level(t.get("check"), path, "check.entry"),
        mode: parse_entry_mode(t.get("mode"), path),
        path: parse_string_or_else(t.get("path"), EntryConfig::default_path),
        candidates: parse_string_array(t.get("candidates"))
            .unwrap_or_else(EntryConfig::default_candidates),
        min_body_chars: parse_min_body_chars(t.get("min_body_chars"), path),
    }
}

/// Parse links check configuration from TOML value.
pub(super) fn parse_links_config(value: Option<&toml::Value>, path: &Path) -> LinksConfig {
    let Some(toml::Value::Table(t)) = value else {
        return LinksConfig::default();
    };
    warn_unknown_keys(path, "check.links", t, KNOWN_LINKS_KEYS);

    LinksConfig {
        check: parse_check_level(t.get("check"), path, "check.links"),
        exclude: parse_string_array_or_empty(t.get("exclude")),
    }
}
