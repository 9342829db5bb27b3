// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML file discovery.
//!
//! Uses the `ignore` crate for directory traversal with optional gitignore
//! support, custom exclude patterns and depth limits. The walk is sequential
//! and sorted by file name so every run sees files in the same order.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::config::ProjectConfig;

/// Suffix a file name must carry to be collected.
pub const HTML_SUFFIX: &str = ".html";

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Directories never descended into.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &[".git"];

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (default: 100).
    pub max_depth: Option<usize>,

    /// Glob patterns excluded at walk time (prevents I/O on subtrees).
    pub exclude_patterns: Vec<String>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to skip hidden files.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            exclude_patterns: Vec::new(),
            git_ignore: false,
            hidden: false,
        }
    }
}

impl WalkerConfig {
    /// Build walker settings from the `[project]` config table.
    pub fn from_project(project: &ProjectConfig) -> Self {
        Self {
            exclude_patterns: project.ignore.patterns.clone(),
            git_ignore: project.gitignore,
            hidden: project.hidden,
            ..Default::default()
        }
    }
}

/// An HTML file found under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFile {
    /// Absolute (root-joined) path to the file.
    pub path: PathBuf,

    /// Path relative to the root, `/`-separated.
    pub relative: String,
}

impl HtmlFile {
    /// Create a record for `path` found under `root`.
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = relative_posix(root, &path);
        Self { path, relative }
    }

    /// Directory containing the file.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }
}

/// Render `path` relative to `root` with `/` separators.
pub fn relative_posix(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Statistics from a walk operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    /// HTML files collected.
    pub files_found: usize,

    /// Other files seen and passed over.
    pub files_skipped: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// Sequential HTML file walker.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    /// Create a new walker with the given configuration.
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    fn builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .ignore(false)
            .parents(self.config.git_ignore)
            .require_git(false)
            .follow_links(true) // ignore crate detects loops
            .sort_by_file_name(|a, b| a.cmp(b))
            .max_depth(self.config.max_depth);

        // In ignore's override system a `!` prefix excludes matching paths.
        if !self.config.exclude_patterns.is_empty() {
            let mut override_builder = OverrideBuilder::new(root);
            for pattern in &self.config.exclude_patterns {
                if let Err(err) = override_builder.add(&format!("!{}", pattern)) {
                    tracing::warn!("invalid ignore pattern {:?}: {}", pattern, err);
                }
            }
            match override_builder.build() {
                Ok(overrides) => {
                    builder.overrides(overrides);
                }
                Err(err) => tracing::warn!("ignore patterns not applied: {}", err),
            }
        }

        builder.filter_entry(|entry| {
            !entry.file_type().is_some_and(|t| t.is_dir())
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
        });

        builder
    }

    /// Walk `root` and collect every `*.html` file, sorted by relative path.
    pub fn walk_collect(&self, root: &Path) -> (Vec<HtmlFile>, WalkStats) {
        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        for entry in self.builder(root).build() {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_some_and(|t| t.is_file()) {
                        continue;
                    }
                    if !entry.file_name().to_string_lossy().ends_with(HTML_SUFFIX) {
                        stats.files_skipped += 1;
                        continue;
                    }
                    tracing::trace!("found {}", entry.path().display());
                    files.push(HtmlFile::new(root, entry.into_path()));
                    stats.files_found += 1;
                }
                Err(err) => {
                    if is_loop_error(&err) {
                        tracing::warn!("Symlink loop detected: {}", err);
                        stats.symlink_loops += 1;
                    } else {
                        tracing::warn!("Walk error: {}", err);
                        stats.errors += 1;
                    }
                }
            }
        }

        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        (files, stats)
    }
}

/// Collect all HTML files under `root`.
pub fn collect_html_files(root: &Path, config: &WalkerConfig) -> (Vec<HtmlFile>, WalkStats) {
    FileWalker::new(config.clone()).walk_collect(root)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
