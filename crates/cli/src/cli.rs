// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorFlag;
use crate::output::DEFAULT_LIMIT;
use crate::walker::DEFAULT_MAX_DEPTH;

/// Validates a static HTML site: pages exist, the entry page is well formed
/// and relative links resolve
#[derive(Parser)]
#[command(name = "sitelint")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SITELINT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run site checks
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Site root directory (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum violations to display
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_name = "N")]
    pub limit: usize,

    /// Show all violations (no limit)
    #[arg(long)]
    pub no_limit: bool,

    /// Report every violation instead of stopping at the first per check
    #[arg(long)]
    pub keep_going: bool,

    /// Maximum directory depth to traverse
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, value_name = "N")]
    pub max_depth: usize,

    // Check enable flags (run only these checks)
    /// Run only the files check
    #[arg(long)]
    pub files: bool,

    /// Run only the entry check
    #[arg(long)]
    pub entry: bool,

    /// Run only the links check
    #[arg(long)]
    pub links: bool,

    // Check disable flags (skip these checks)
    /// Skip the files check
    #[arg(long)]
    pub no_files: bool,

    /// Skip the entry check
    #[arg(long)]
    pub no_entry: bool,

    /// Skip the links check
    #[arg(long)]
    pub no_links: bool,
}

impl CheckArgs {
    /// Color preference from `--color` / `--no-color`.
    pub fn color_flag(&self) -> ColorFlag {
        ColorFlag::from_flags(self.color, self.no_color)
    }

    /// Display limit, None when `--no-limit` is given.
    pub fn display_limit(&self) -> Option<usize> {
        if self.no_limit { None } else { Some(self.limit) }
    }
}

/// Trait for filtering checks by name.
pub trait CheckFilter {
    /// Get list of explicitly enabled checks.
    fn enabled_checks(&self) -> Vec<String>;

    /// Get list of explicitly disabled checks.
    fn disabled_checks(&self) -> Vec<String>;

    /// Check if a check should be included based on filters.
    ///
    /// If any checks are explicitly enabled, only those are included.
    /// Otherwise, all checks are included except those explicitly disabled.
    fn should_include(&self, check_name: &str) -> bool {
        let enabled = self.enabled_checks();
        let disabled = self.disabled_checks();

        if !enabled.is_empty() {
            enabled.iter().any(|e| e == check_name)
        } else {
            !disabled.iter().any(|d| d == check_name)
        }
    }
}

/// Collect check names from boolean flags.
macro_rules! collect_checks {
    ($self:expr, $($flag:ident => $name:expr),+ $(,)?) => {{
        let mut checks = Vec::new();
        $(
            if $self.$flag {
                checks.push($name.to_string());
            }
        )+
        checks
    }};
}

impl CheckFilter for CheckArgs {
    fn enabled_checks(&self) -> Vec<String> {
        collect_checks!(self,
            files => "files",
            entry => "entry",
            links => "links",
        )
    }

    fn disabled_checks(&self) -> Vec<String> {
        collect_checks!(self,
            no_files => "files",
            no_entry => "entry",
            no_links => "links",
        )
    }
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
