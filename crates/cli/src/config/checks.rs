// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check-specific configuration structures.

/// Check level: error or off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CheckLevel {
    #[default]
    Error,
    Off,
}

impl CheckLevel {
    /// Accepted config spellings.
    pub const NAMES: &'static [&'static str] = &["error", "off"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "error" => Some(CheckLevel::Error),
            "off" => Some(CheckLevel::Off),
            _ => None,
        }
    }

    pub fn is_enabled(self) -> bool {
        self != CheckLevel::Off
    }
}

/// How the entry document is located and validated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Fixed entry path; title and heading only.
    #[default]
    Strict,
    /// First existing candidate; also requires html tags and body text.
    Loose,
}

impl EntryMode {
    /// Accepted config spellings.
    pub const NAMES: &'static [&'static str] = &["strict", "loose"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "strict" => Some(EntryMode::Strict),
            "loose" => Some(EntryMode::Loose),
            _ => None,
        }
    }
}

/// File discovery check configuration.
#[derive(Debug, Default, Clone)]
pub struct FilesConfig {
    pub check: CheckLevel,
}

/// Entry document check configuration.
#[derive(Debug, Clone)]
pub struct EntryConfig {
    pub check: CheckLevel,

    pub mode: EntryMode,

    /// Entry path relative to the root (strict mode).
    pub path: String,

    /// Ordered entry candidates relative to the root (loose mode).
    pub candidates: Vec<String>,

    /// Body text must be longer than this many characters (loose mode).
    pub min_body_chars: usize,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            check: CheckLevel::default(),
            mode: EntryMode::default(),
            path: Self::default_path(),
            candidates: Self::default_candidates(),
            min_body_chars: Self::DEFAULT_MIN_BODY_CHARS,
        }
    }
}

impl EntryConfig {
    pub const DEFAULT_MIN_BODY_CHARS: usize = 10;

    pub(super) fn default_path() -> String {
        "index.html".to_string()
    }

    pub(super) fn default_candidates() -> Vec<String> {
        vec![
            "index.html".to_string(),
            "dist/index.html".to_string(),
            "build/index.html".to_string(),
        ]
    }
}

/// Relative link check configuration.
#[derive(Debug, Default, Clone)]
pub struct LinksConfig {
    pub check: CheckLevel,

    /// Glob patterns of HTML files whose links are not validated.
    pub exclude: Vec<String>,
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
