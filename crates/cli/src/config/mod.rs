// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles sitelint.toml parsing with version validation and unknown key warnings.

mod checks;
mod parse;
mod suggest;

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

pub use checks::{CheckLevel, EntryConfig, EntryMode, FilesConfig, LinksConfig};

use crate::error::{Error, Result};
use parse::{
    parse_bool, parse_entry_config, parse_files_config, parse_links_config,
    parse_string_array_or_empty, warn_unknown_key, warn_unknown_keys,
};
use suggest::warn_unknown_check;

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "sitelint.toml";

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    project: Option<toml::Value>,

    #[serde(default)]
    check: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Project configuration.
    pub project: ProjectConfig,

    /// Check configurations.
    pub check: CheckConfig,
}

impl Config {
    /// Whether the named check is enabled by config.
    pub fn is_enabled(&self, check: &str) -> bool {
        match check {
            "files" => self.check.files.check.is_enabled(),
            "entry" => self.check.entry.check.is_enabled(),
            "links" => self.check.links.check.is_enabled(),
            _ => true,
        }
    }
}

/// Check-specific configurations.
#[derive(Debug, Default)]
pub struct CheckConfig {
    /// HTML file discovery.
    pub files: FilesConfig,

    /// Entry document title/heading validation.
    pub entry: EntryConfig,

    /// Relative link resolution.
    pub links: LinksConfig,
}

/// Project-level configuration.
#[derive(Debug, Default, Clone)]
pub struct ProjectConfig {
    /// Skip hidden files and directories.
    pub hidden: bool,

    /// Honour .gitignore files.
    pub gitignore: bool,

    /// Custom ignore patterns.
    pub ignore: IgnoreConfig,
}

/// Ignore pattern configuration.
#[derive(Debug, Default, Clone)]
pub struct IgnoreConfig {
    /// Glob patterns to ignore (e.g., "node_modules", "drafts/**").
    pub patterns: Vec<String>,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "project", "check"];

/// Known project keys in the config.
const KNOWN_PROJECT_KEYS: &[&str] = &["hidden", "gitignore", "ignore"];

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
        ));
    }
    Ok(())
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;
    if version_check.version.is_none() {
        return Err(config_error(path, "missing required field: version"));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;
    check_version(flexible.version, path)?;

    let unknown_keys: BTreeSet<&String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .collect();
    for key in unknown_keys {
        warn_unknown_key(path, key);
    }

    let project = match flexible.project {
        Some(toml::Value::Table(t)) => {
            let ignore = match t.get("ignore") {
                Some(toml::Value::Table(ignore_table)) => {
                    warn_unknown_keys(path, "project.ignore", ignore_table, &["patterns"]);
                    IgnoreConfig {
                        patterns: parse_string_array_or_empty(ignore_table.get("patterns")),
                    }
                }
                _ => IgnoreConfig::default(),
            };
            warn_unknown_keys(path, "project", &t, KNOWN_PROJECT_KEYS);

            ProjectConfig {
                hidden: parse_bool(t.get("hidden")),
                gitignore: parse_bool(t.get("gitignore")),
                ignore,
            }
        }
        _ => ProjectConfig::default(),
    };

    let check = match flexible.check {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !crate::checks::CHECK_NAMES.contains(&key.as_str()) {
                    warn_unknown_check(path, key);
                }
            }

            CheckConfig {
                files: parse_files_config(t.get("files"), path),
                entry: parse_entry_config(t.get("entry"), path),
                links: parse_links_config(t.get("links"), path),
            }
        }
        _ => CheckConfig::default(),
    };

    Ok(Config {
        version: flexible.version,
        project,
        check,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
